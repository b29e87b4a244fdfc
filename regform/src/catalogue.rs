//! The standard registration catalogue.

use regform_types::{FieldCatalogue, FieldDescriptor, Section};

/// The standard catalogue used for programs that don't bring their own.
///
/// Personal fields are always asked; invoice fields appear for paid
/// programs; travel fields appear for offline and hybrid programs.
pub fn canonical_catalogue() -> FieldCatalogue {
    use Section::{Payment, Personal, Travel};

    [
        // Personal
        FieldDescriptor::text("fullName", "Full Name", Personal)
            .with_mandatory(true)
            .with_prefilled(true),
        FieldDescriptor::dropdown(
            "gender",
            "Gender",
            Personal,
            ["Male", "Female", "Other", "Prefer not to say"],
        ),
        FieldDescriptor::text("mobile", "Mobile Number", Personal)
            .with_mandatory(true)
            .with_prefilled(true),
        FieldDescriptor::email("email", "Email Address", Personal)
            .with_mandatory(true)
            .with_prefilled(true),
        FieldDescriptor::date("dob", "Date of Birth", Personal),
        FieldDescriptor::text("infinitheismContact", "Infinitheism Contact", Personal),
        FieldDescriptor::text("city", "City", Personal),
        FieldDescriptor::text("roommate", "Preferred Roommate's Name", Personal),
        FieldDescriptor::paragraph("note", "Note", Personal),
        // Invoice
        FieldDescriptor::text("invoiceName", "Name for Invoice", Payment),
        FieldDescriptor::email("invoiceEmail", "Email Address for Invoice", Payment),
        FieldDescriptor::toggle("gstRegistered", "Registered under Indian GST", Payment),
        FieldDescriptor::paragraph("invoiceAddress", "Address for Invoice", Payment),
        FieldDescriptor::text("tds", "TDS", Payment),
        FieldDescriptor::text("tan", "TAN", Payment),
        FieldDescriptor::dropdown(
            "paymentMethod",
            "Payment Method",
            Payment,
            ["Credit Card", "Debit Card", "UPI", "Bank Transfer"],
        ),
        FieldDescriptor::text("amount", "Amount", Payment),
        FieldDescriptor::date("handoverDate", "Handover Date", Payment),
        FieldDescriptor::text("handoverTo", "Handover To", Payment),
        // Travel
        FieldDescriptor::dropdown(
            "idType",
            "ID Type",
            Travel,
            ["Passport", "Driving License", "Aadhar Card", "PAN Card"],
        ),
        FieldDescriptor::text("idNumber", "ID Number", Travel),
        FieldDescriptor::file("idPicture", "Upload ID Picture", Travel),
        FieldDescriptor::file("userPicture", "Upload Your Picture", Travel),
        FieldDescriptor::dropdown(
            "tshirtSize",
            "T-shirt Size",
            Travel,
            ["XS", "S", "M", "L", "XL", "XXL"],
        ),
        FieldDescriptor::toggle("travelUpdate", "Travel Details: Update now / later", Travel),
        FieldDescriptor::text("airlineName", "Flight: Airline Name", Travel),
        FieldDescriptor::text("flightNumber", "Flight: Number", Travel),
        FieldDescriptor::date("arrivalDateTime", "Arrival Date & Time", Travel),
        FieldDescriptor::text("comingFrom", "Coming From", Travel),
        FieldDescriptor::text("pickupTime", "Airport Pickup Time", Travel),
        FieldDescriptor::text(
            "checkInTime",
            "Own Transport: Check-in Time & Location",
            Travel,
        ),
        FieldDescriptor::text("cityPickup", "City Pickup: Time and Location", Travel),
    ]
    .into_iter()
    .collect()
}
