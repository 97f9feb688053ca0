#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;
use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    DateTime,
}

impl FieldKind {
    pub fn accepts(&self, c: char) -> bool {
        return match self {
            FieldKind::Text => true,
            FieldKind::DateTime => {
                c.is_ascii_digit() || matches!(c, '-' | ':' | 'T' | '.' | 'Z' | '+')
            }
        };
    }
}

/// The eight editable fields of a record, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum DraftField {
    CompanySigDate,
    CompanySignatureName,
    DocumentName,
    DocumentStatus,
    DocumentType,
    EmployeeNumber,
    EmployeeSigDate,
    EmployeeSignatureName,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        return match self {
            DraftField::CompanySigDate => "Company signature date",
            DraftField::CompanySignatureName => "Company signature name",
            DraftField::DocumentName => "Document name",
            DraftField::DocumentStatus => "Document status",
            DraftField::DocumentType => "Document type",
            DraftField::EmployeeNumber => "Employee number",
            DraftField::EmployeeSigDate => "Employee signature date",
            DraftField::EmployeeSignatureName => "Employee signature name",
        };
    }

    pub fn kind(&self) -> FieldKind {
        return match self {
            DraftField::CompanySigDate | DraftField::EmployeeSigDate => FieldKind::DateTime,
            _ => FieldKind::Text,
        };
    }
}

/// Editable copy of a record's fields while the dialog is open. Serializes to
/// the request body for create and update.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub company_sig_date: String,
    pub company_signature_name: String,
    pub document_name: String,
    pub document_status: String,
    pub document_type: String,
    pub employee_number: String,
    pub employee_sig_date: String,
    pub employee_signature_name: String,
}

impl Draft {
    pub fn get(&self, field: DraftField) -> &str {
        return match field {
            DraftField::CompanySigDate => &self.company_sig_date,
            DraftField::CompanySignatureName => &self.company_signature_name,
            DraftField::DocumentName => &self.document_name,
            DraftField::DocumentStatus => &self.document_status,
            DraftField::DocumentType => &self.document_type,
            DraftField::EmployeeNumber => &self.employee_number,
            DraftField::EmployeeSigDate => &self.employee_sig_date,
            DraftField::EmployeeSignatureName => &self.employee_signature_name,
        };
    }

    pub fn set(&mut self, field: DraftField, value: &str) {
        let slot = match field {
            DraftField::CompanySigDate => &mut self.company_sig_date,
            DraftField::CompanySignatureName => &mut self.company_signature_name,
            DraftField::DocumentName => &mut self.document_name,
            DraftField::DocumentStatus => &mut self.document_status,
            DraftField::DocumentType => &mut self.document_type,
            DraftField::EmployeeNumber => &mut self.employee_number,
            DraftField::EmployeeSigDate => &mut self.employee_sig_date,
            DraftField::EmployeeSignatureName => &mut self.employee_signature_name,
        };
        *slot = value.to_string();
    }

    pub fn values(&self) -> Vec<&str> {
        return DraftField::iter()
            .map(|field| return self.get(field))
            .collect();
    }
}

/// A document signature entry as returned by the server.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Draft,
}

impl Record {
    pub fn new(id: i64, fields: Draft) -> Record {
        return Record { id, fields };
    }

    pub fn draft(&self) -> Draft {
        return self.fields.clone();
    }
}
