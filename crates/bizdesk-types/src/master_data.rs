use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::FieldErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasterSection {
    ProductManagement,
    MaterialManagement,
    OrderPayment,
}

impl MasterSection {
    pub const ALL: [MasterSection; 3] = [
        MasterSection::ProductManagement,
        MasterSection::MaterialManagement,
        MasterSection::OrderPayment,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MasterSection::ProductManagement => "Product Management",
            MasterSection::MaterialManagement => "Material Management",
            MasterSection::OrderPayment => "Order & Payment Settings",
        }
    }

    pub fn resources(self) -> impl Iterator<Item = &'static MasterResource> {
        RESOURCES.iter().filter(move |r| r.section == self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasterField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// One master-data screen: a locally held table of records edited through a modal form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasterResource {
    pub slug: &'static str,
    pub title: &'static str,
    pub singular: &'static str,
    pub description: &'static str,
    pub section: MasterSection,
    pub fields: &'static [MasterField],
}

const fn text(name: &'static str, label: &'static str) -> MasterField {
    MasterField {
        name,
        label,
        kind: FieldKind::Text,
    }
}

const fn number(name: &'static str, label: &'static str) -> MasterField {
    MasterField {
        name,
        label,
        kind: FieldKind::Number,
    }
}

pub static RESOURCES: [MasterResource; 10] = [
    MasterResource {
        slug: "product-categories",
        title: "Product Categories/Collections",
        singular: "Category",
        description: "Manage categories for products.",
        section: MasterSection::ProductManagement,
        fields: &[text("name", "Category Name")],
    },
    MasterResource {
        slug: "products",
        title: "Products",
        singular: "Product",
        description: "Manage final products for sale.",
        section: MasterSection::ProductManagement,
        fields: &[text("name", "Product Name")],
    },
    MasterResource {
        slug: "product-templates",
        title: "Product Templates",
        singular: "Template",
        description: "Define reusable product structures (BOMs).",
        section: MasterSection::ProductManagement,
        fields: &[text("name", "Template Name")],
    },
    MasterResource {
        slug: "product-stock",
        title: "Product Stock",
        singular: "Stock",
        description: "Manage inventory for final products.",
        section: MasterSection::ProductManagement,
        fields: &[text("product", "Product"), number("quantity", "Quantity")],
    },
    MasterResource {
        slug: "materials",
        title: "Materials",
        singular: "Material",
        description: "Manage raw materials and components.",
        section: MasterSection::MaterialManagement,
        fields: &[text("name", "Material Name")],
    },
    MasterResource {
        slug: "material-attributes",
        title: "Material Attributes",
        singular: "Attribute",
        description: "Define attributes for materials like color or size.",
        section: MasterSection::MaterialManagement,
        fields: &[text("name", "Attribute Name")],
    },
    MasterResource {
        slug: "material-stock",
        title: "Material Stock",
        singular: "Stock",
        description: "Manage inventory levels for material variants.",
        section: MasterSection::MaterialManagement,
        fields: &[text("material", "Material"), number("quantity", "Quantity")],
    },
    MasterResource {
        slug: "order-statuses",
        title: "Order Statuses",
        singular: "Status",
        description: "Define order lifecycle statuses.",
        section: MasterSection::OrderPayment,
        fields: &[text("name", "Status Name")],
    },
    MasterResource {
        slug: "payment-methods",
        title: "Payment Methods",
        singular: "Method",
        description: "Manage accepted payment methods.",
        section: MasterSection::OrderPayment,
        fields: &[text("name", "Method Name")],
    },
    MasterResource {
        slug: "payment-statuses",
        title: "Payment Statuses",
        singular: "Status",
        description: "Define payment lifecycle statuses.",
        section: MasterSection::OrderPayment,
        fields: &[text("name", "Status Name")],
    },
];

pub fn find_resource(slug: &str) -> Option<&'static MasterResource> {
    RESOURCES.iter().find(|r| r.slug == slug)
}

impl MasterResource {
    pub fn path(&self) -> String {
        format!("/master-data/{}", self.slug)
    }

    /// Checks a submitted form: every field is required, number fields must parse.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in self.fields {
            let value = values.get(field.name).map(|v| v.trim()).unwrap_or("");
            if value.is_empty() {
                errors.insert(field.name.to_string(), format!("{} is required", field.label));
            } else if field.kind == FieldKind::Number && value.parse::<f64>().is_err() {
                errors.insert(field.name.to_string(), format!("{} must be a number", field.label));
            }
        }
        errors
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MasterRecord {
    pub key: u64,
    pub values: BTreeMap<String, String>,
}

impl MasterRecord {
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Rows of one master-data screen, owned by that screen alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MasterTable {
    records: Vec<MasterRecord>,
    next_key: u64,
}

impl MasterTable {
    pub fn records(&self) -> &[MasterRecord] {
        &self.records
    }

    pub fn get(&self, key: u64) -> Option<&MasterRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn insert(&mut self, values: BTreeMap<String, String>) -> u64 {
        self.next_key += 1;
        let key = self.next_key;
        self.records.push(MasterRecord { key, values });
        key
    }

    /// Replaces the values of an existing row; returns false when the key is gone.
    pub fn update(&mut self, key: u64, values: BTreeMap<String, String>) -> bool {
        match self.records.iter_mut().find(|r| r.key == key) {
            Some(record) => {
                record.values = values;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.key != key);
        self.records.len() != before
    }
}
