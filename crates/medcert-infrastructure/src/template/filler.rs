//! Fills template slots from collected field values.

use lopdf::{Dictionary, Document, Object, ObjectId};
use medcert_core::document::{CertificateRenderer, RenderedDocument};
use medcert_core::field::FieldStore;
use medcert_core::{MedcertError, Result};

use super::certificate::CertificateTemplate;
use super::slot_map;

/// Fills the certificate template from a field snapshot.
///
/// Stateless apart from the read-only template, so a single filler is
/// shared by every session.
pub struct TemplateFiller {
    template: CertificateTemplate,
}

impl TemplateFiller {
    pub fn new(template: CertificateTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &CertificateTemplate {
        &self.template
    }

    /// Produces a filled certificate.
    ///
    /// Atomic from the caller's point of view: either a complete document
    /// comes back or an error does; the loaded template is never touched.
    ///
    /// # Errors
    ///
    /// Returns `TemplateFill` when the working copy has no usable document
    /// structure or fails to serialize.
    pub fn fill(&self, fields: &FieldStore) -> Result<RenderedDocument> {
        let mut document = self.template.working_copy();
        let widgets = enumerate_widgets(&document);

        for (slot, value) in slot_map::resolve(fields) {
            match widgets.iter().find(|(name, _)| name == slot) {
                Some((_, id)) => set_widget_value(&mut document, *id, value)?,
                // A mapped field with no slot in this template is dropped,
                // not an error.
                None => tracing::debug!(slot, "template has no widget for slot"),
            }
        }

        set_need_appearances(&mut document)?;

        let mut buffer = Vec::new();
        document
            .save_to(&mut buffer)
            .map_err(|e| MedcertError::template_fill(format!("serialize failed: {e}")))?;
        Ok(RenderedDocument::new(buffer))
    }
}

impl CertificateRenderer for TemplateFiller {
    fn render(&self, fields: &FieldStore) -> Result<RenderedDocument> {
        self.fill(fields)
    }
}

/// Enumerates named widget annotations across every page.
///
/// Pages iterate in page-number order and annotations in array order, so
/// enumeration is deterministic. Pages without annotations, unnamed
/// widgets, and unresolvable references are skipped.
fn enumerate_widgets(document: &Document) -> Vec<(String, ObjectId)> {
    let mut widgets = Vec::new();
    for (_, page_id) in document.get_pages() {
        let Ok(page) = document.get_dictionary(page_id) else {
            continue;
        };
        let Ok(annots) = page.get(b"Annots") else {
            continue;
        };
        let ids = match annots {
            Object::Reference(id) => match document.get_object(*id).and_then(|o| o.as_array()) {
                Ok(array) => annotation_ids(array),
                Err(_) => continue,
            },
            Object::Array(array) => annotation_ids(array),
            _ => continue,
        };
        for id in ids {
            let Ok(annot) = document.get_dictionary(id) else {
                continue;
            };
            if let Some(name) = widget_name(annot) {
                widgets.push((name, id));
            }
        }
    }
    widgets
}

fn annotation_ids(array: &[Object]) -> Vec<ObjectId> {
    array.iter().filter_map(|o| o.as_reference().ok()).collect()
}

/// Field name of a widget annotation, if it carries one.
fn widget_name(annot: &Dictionary) -> Option<String> {
    let subtype = annot.get(b"Subtype").and_then(|o| o.as_name()).ok()?;
    if subtype != b"Widget" {
        return None;
    }
    let name = annot.get(b"T").and_then(|o| o.as_str()).ok()?;
    Some(String::from_utf8_lossy(name).into_owned())
}

/// Writes `value` into the widget and drops its stale appearance stream,
/// which would otherwise keep showing the template's blank rendering.
fn set_widget_value(document: &mut Document, id: ObjectId, value: &str) -> Result<()> {
    let widget = document
        .get_object_mut(id)
        .and_then(|o| o.as_dict_mut())
        .map_err(|e| MedcertError::template_fill(format!("widget {id:?}: {e}")))?;
    widget.set("V", Object::string_literal(value));
    widget.remove(b"AP");
    Ok(())
}

/// Flags the interactive form so viewers regenerate field appearances.
fn set_need_appearances(document: &mut Document) -> Result<()> {
    let catalog_id = document
        .trailer
        .get(b"Root")
        .and_then(|o| o.as_reference())
        .map_err(|e| MedcertError::template_fill(format!("no document catalog: {e}")))?;

    // AcroForm is usually an indirect object but may be inlined in the
    // catalog; a template without one is tolerated.
    let acroform_ref = document
        .get_dictionary(catalog_id)
        .ok()
        .and_then(|catalog| catalog.get(b"AcroForm").ok())
        .and_then(|acroform| acroform.as_reference().ok());

    if let Some(id) = acroform_ref {
        let acroform = document
            .get_object_mut(id)
            .and_then(|o| o.as_dict_mut())
            .map_err(|e| MedcertError::template_fill(format!("AcroForm {id:?}: {e}")))?;
        acroform.set("NeedAppearances", Object::Boolean(true));
        return Ok(());
    }

    let inline = document
        .get_dictionary(catalog_id)
        .ok()
        .and_then(|catalog| catalog.get(b"AcroForm").ok())
        .and_then(|acroform| match acroform {
            Object::Dictionary(dict) => Some(dict.clone()),
            _ => None,
        });
    if let Some(mut acroform) = inline {
        acroform.set("NeedAppearances", Object::Boolean(true));
        let catalog = document
            .get_object_mut(catalog_id)
            .and_then(|o| o.as_dict_mut())
            .map_err(|e| MedcertError::template_fill(format!("catalog: {e}")))?;
        catalog.set("AcroForm", Object::Dictionary(acroform));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use medcert_core::field::Field;
    use std::collections::HashMap;

    /// Builds a one-page template whose widgets carry the given names,
    /// mirroring the real certificate's structure (widget annotations
    /// referenced from both the page and an indirect AcroForm).
    fn build_template(slots: &[&str]) -> CertificateTemplate {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut annot_ids = Vec::new();
        for slot in slots {
            let annot = dictionary! {
                "Type" => "Annot",
                "Subtype" => "Widget",
                "FT" => "Tx",
                "T" => Object::string_literal(*slot),
                "Rect" => vec![0.into(), 0.into(), 200.into(), 20.into()],
            };
            annot_ids.push(doc.add_object(annot));
        }

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Annots" => annot_ids
                .iter()
                .map(|id| Object::Reference(*id))
                .collect::<Vec<_>>(),
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let acroform_id = doc.add_object(dictionary! {
            "Fields" => annot_ids
                .iter()
                .map(|id| Object::Reference(*id))
                .collect::<Vec<_>>(),
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
            "AcroForm" => acroform_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize test template");
        CertificateTemplate::from_bytes(&bytes).expect("parse test template")
    }

    /// All slots of the real certificate template.
    fn full_template() -> CertificateTemplate {
        let slots: Vec<&str> = slot_map::SLOT_MAP
            .iter()
            .flat_map(|m| m.slots.iter().copied())
            .collect();
        build_template(&slots)
    }

    fn widget_values(document: &RenderedDocument) -> HashMap<String, String> {
        let doc = Document::load_mem(document.as_bytes()).expect("reload filled document");
        let mut values = HashMap::new();
        for (name, id) in enumerate_widgets(&doc) {
            let value = doc
                .get_dictionary(id)
                .ok()
                .and_then(|annot| annot.get(b"V").ok())
                .and_then(|v| v.as_str().ok())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default();
            values.insert(name, value);
        }
        values
    }

    fn jane_doe() -> FieldStore {
        let mut fields = FieldStore::new();
        fields.set(Field::PatientName, "Jane Doe");
        fields.set(Field::PatientAge, "34");
        fields.set(Field::Gender, "Female");
        fields.set(Field::TestDate, "2024-01-01");
        fields.set(Field::ReportDate, "2024-01-05");
        fields.set(Field::ReferringDoctor, "Dr. A");
        fields.set(Field::SigningDoctor, "Dr. B");
        fields
    }

    #[test]
    fn test_fill_writes_every_mapped_slot() {
        let filler = TemplateFiller::new(full_template());
        let document = filler.fill(&jane_doe()).unwrap();

        let values = widget_values(&document);
        // The patient name lands in both of its slots.
        assert_eq!(values["text_2hcpn"], "Jane Doe");
        assert_eq!(values["text_6njmy"], "Jane Doe");
        assert_eq!(values["text_7wpva"], "34");
        assert_eq!(values["text_gender"], "Female");
        assert_eq!(values["text_3ydqz"], "2024-01-01");
        assert_eq!(values["text_10vfgg"], "2024-01-01");
        assert_eq!(values["text_4ybok"], "2024-01-05");
        assert_eq!(values["text_9quis"], "2024-01-05");
        assert_eq!(values["text_5rysh"], "Dr. A");
        assert_eq!(values["text_8uoj"], "Dr. A");
        assert_eq!(values["text_11aaku"], "Dr. B");
        assert_eq!(values["text_11ikbs"], "Dr. B");
    }

    #[test]
    fn test_fill_is_idempotent() {
        let filler = TemplateFiller::new(full_template());
        let fields = jane_doe();

        let first = filler.fill(&fields).unwrap();
        let second = filler.fill(&fields).unwrap();
        assert_eq!(first, second, "identical fills must be byte-identical");
    }

    #[test]
    fn test_fill_tolerates_missing_slots() {
        // A template carrying only the age slot: every other mapped field
        // has nowhere to go and is silently dropped.
        let filler = TemplateFiller::new(build_template(&["text_7wpva"]));
        let document = filler.fill(&jane_doe()).unwrap();

        let values = widget_values(&document);
        assert_eq!(values.len(), 1);
        assert_eq!(values["text_7wpva"], "34");
    }

    #[test]
    fn test_absent_fields_leave_slots_blank() {
        let filler = TemplateFiller::new(full_template());
        let mut fields = FieldStore::new();
        fields.set(Field::PatientName, "Jane Doe");

        let document = filler.fill(&fields).unwrap();
        let values = widget_values(&document);
        assert_eq!(values["text_2hcpn"], "Jane Doe");
        assert_eq!(values["text_7wpva"], "");
        assert_eq!(values["text_gender"], "");
    }

    #[test]
    fn test_unknown_template_widgets_are_untouched() {
        let filler = TemplateFiller::new(build_template(&["text_7wpva", "text_extra"]));
        let document = filler.fill(&jane_doe()).unwrap();

        let values = widget_values(&document);
        assert_eq!(values["text_7wpva"], "34");
        assert_eq!(values["text_extra"], "");
    }

    #[test]
    fn test_template_is_never_mutated_by_fills() {
        let filler = TemplateFiller::new(full_template());
        filler.fill(&jane_doe()).unwrap();

        // A fill after a populated fill still starts from a blank template.
        let blank = filler.fill(&FieldStore::new()).unwrap();
        let values = widget_values(&blank);
        assert!(values.values().all(|v| v.is_empty()), "{values:?}");
    }

    #[test]
    fn test_filled_document_requests_appearance_rebuild() {
        let filler = TemplateFiller::new(full_template());
        let document = filler.fill(&jane_doe()).unwrap();

        let doc = Document::load_mem(document.as_bytes()).unwrap();
        let catalog_id = doc.trailer.get(b"Root").and_then(|o| o.as_reference()).unwrap();
        let acroform_id = doc
            .get_dictionary(catalog_id)
            .unwrap()
            .get(b"AcroForm")
            .and_then(|o| o.as_reference())
            .unwrap();
        let need_appearances = doc
            .get_dictionary(acroform_id)
            .unwrap()
            .get(b"NeedAppearances")
            .and_then(|o| o.as_bool())
            .unwrap();
        assert!(need_appearances);
    }
}
