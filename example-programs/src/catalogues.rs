//! Small catalogues with a known shape.

use regform::{FieldCatalogue, FieldDescriptor, Section};

/// Four personal fields; full name and email are prefilled.
pub fn personal_only() -> FieldCatalogue {
    FieldCatalogue::new(personal_fields()).expect("fixture ids are unique")
}

/// Four personal, two payment and three travel fields.
pub fn mixed() -> FieldCatalogue {
    let mut fields = personal_fields();
    fields.extend([
        FieldDescriptor::text("invoiceName", "Name for Invoice", Section::Payment),
        FieldDescriptor::dropdown(
            "paymentMethod",
            "Payment Method",
            Section::Payment,
            ["Credit Card", "UPI"],
        ),
        FieldDescriptor::text("airlineName", "Flight: Airline Name", Section::Travel),
        FieldDescriptor::date("arrivalDateTime", "Arrival Date & Time", Section::Travel),
        FieldDescriptor::file("idPicture", "Upload ID Picture", Section::Travel),
    ]);
    FieldCatalogue::new(fields).expect("fixture ids are unique")
}

fn personal_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("fullName", "Full Name", Section::Personal)
            .with_mandatory(true)
            .with_prefilled(true),
        FieldDescriptor::dropdown("gender", "Gender", Section::Personal, ["Male", "Female"]),
        FieldDescriptor::email("email", "Email Address", Section::Personal)
            .with_mandatory(true)
            .with_prefilled(true),
        FieldDescriptor::paragraph("note", "Note", Section::Personal),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        assert_eq!(personal_only().len(), 4);
        assert_eq!(mixed().len(), 9);
    }
}
