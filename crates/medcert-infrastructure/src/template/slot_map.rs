//! Static mapping from logical fields to template slot names.

use medcert_core::field::{Field, FieldStore};

/// Slots populated by one logical field. A single field may land in several
/// places in the template: the patient name, dates, and doctor names each
/// appear twice.
#[derive(Debug, Clone, Copy)]
pub struct SlotMapping {
    pub field: Field,
    pub slots: &'static [&'static str],
}

/// Logical field → PDF form field names, fixed at build time.
pub const SLOT_MAP: &[SlotMapping] = &[
    SlotMapping {
        field: Field::PatientName,
        slots: &["text_2hcpn", "text_6njmy"],
    },
    SlotMapping {
        field: Field::TestDate,
        slots: &["text_3ydqz", "text_10vfgg"],
    },
    SlotMapping {
        field: Field::ReportDate,
        slots: &["text_4ybok", "text_9quis"],
    },
    SlotMapping {
        field: Field::ReferringDoctor,
        slots: &["text_5rysh", "text_8uoj"],
    },
    SlotMapping {
        field: Field::SigningDoctor,
        slots: &["text_11aaku", "text_11ikbs"],
    },
    SlotMapping {
        field: Field::PatientAge,
        slots: &["text_7wpva"],
    },
    SlotMapping {
        field: Field::Gender,
        slots: &["text_gender"],
    },
];

/// Resolves a snapshot into `(slot name, text)` pairs.
///
/// Only fields present and non-empty in the snapshot resolve; absent fields
/// leave their slots at the template's own blank default.
pub fn resolve(fields: &FieldStore) -> Vec<(&'static str, &str)> {
    let mut resolved = Vec::new();
    for mapping in SLOT_MAP {
        let Some(value) = fields.get(mapping.field) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        for slot in mapping.slots {
            resolved.push((*slot, value));
        }
    }
    resolved
}
