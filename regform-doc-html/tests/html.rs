use example_programs::{catalogues, hybrid_conference, offline_workshop, online_seminar};
use regform::{
    FieldCatalogue, FieldDescriptor, LayoutStyle, ProgramConfiguration, RenderContext, Section,
    UserType, canonical_catalogue, render_preview,
};
use regform_doc_html::{HtmlOptions, to_html};

fn render(
    config: &ProgramConfiguration,
    catalogue: &FieldCatalogue,
    context: &RenderContext,
) -> String {
    to_html(&render_preview(config, catalogue, context), &HtmlOptions::new())
}

fn control_lines(html: &str) -> Vec<&str> {
    html.lines()
        .map(str::trim)
        .filter(|l| {
            l.starts_with("<input") || l.starts_with("<select") || l.starts_with("<textarea")
        })
        .collect()
}

#[test]
fn every_control_is_read_only_or_disabled() {
    let catalogue = canonical_catalogue();
    for config in [
        online_seminar::config(),
        offline_workshop::config(),
        hybrid_conference::config(),
    ] {
        for layout in LayoutStyle::ALL {
            let context = RenderContext::new(UserType::Existing, layout);
            let html = render(&config, &catalogue, &context);
            let controls = control_lines(&html);
            assert!(!controls.is_empty());
            for line in controls {
                assert!(
                    line.contains(" readonly") || line.contains(" disabled"),
                    "editable control: {line}"
                );
            }
            assert!(!html.contains("type=\"submit\""));
        }
    }
}

#[test]
fn mandatory_fields_carry_an_asterisk() {
    let config = online_seminar::config();
    let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
    let html = render(&config, &catalogues::personal_only(), &context);

    assert!(html.contains(
        "<label for=\"fullName\">Full Name <span class=\"regform-required\">*</span></label>"
    ));
    assert!(html.contains("<label for=\"gender\">Gender</label>"));
}

#[test]
fn labels_and_values_are_escaped() {
    let catalogue = FieldCatalogue::new(vec![
        FieldDescriptor::text("pick", "Pick <up> & \"drop\"", Section::Personal),
    ])
    .unwrap();
    let config = ProgramConfiguration {
        program_name: "R&D".into(),
        ..online_seminar::config()
    };
    let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
    let html = render(&config, &catalogue, &context);

    assert!(html.contains("Pick &lt;up&gt; &amp; &quot;drop&quot;"));
    assert!(html.contains("<h1 class=\"regform-title\">R&amp;D Registration</h1>"));
    assert!(!html.contains("<up>"));
}

#[test]
fn dropdown_options_keep_catalogue_order() {
    let config = online_seminar::config();
    let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
    let html = render(&config, &catalogues::personal_only(), &context);

    let male = html.find("<option value=\"Male\">Male</option>").unwrap();
    let female = html.find("<option value=\"Female\">Female</option>").unwrap();
    let placeholder = html.find("<option value=\"\" selected>").unwrap();
    assert!(placeholder < male && male < female);
}

#[test]
fn workshop_shows_mode_note_fees_and_venue() {
    let config = offline_workshop::config();
    let html = render(
        &config,
        &canonical_catalogue(),
        &RenderContext::from_config(&config),
    );

    assert!(html.contains("data-layout=\"two-column\""));
    assert!(html.contains("regform-columns-2"));
    assert!(html.contains("Auto-added due to offline mode"));
    assert!(html.contains("value=\"INR 1500\" readonly"));
    assert!(html.contains("Studio 4, Hill Road, Pune</textarea>"));
}

#[test]
fn question_view_disables_previous_on_first_step() {
    let config = hybrid_conference::config();
    let html = render(
        &config,
        &canonical_catalogue(),
        &RenderContext::from_config(&config),
    );

    assert!(html.contains("<h2>Question 1 of 22</h2>"));
    assert!(html.contains("<button type=\"button\" disabled>Previous</button>"));
    assert!(html.contains("<button type=\"button\">Next Question</button>"));
    assert!(html.contains("Preview shows step-by-step experience."));
    assert!(html.contains("value=\"John Doe\" readonly"));
}

#[test]
fn empty_question_preview_says_so() {
    let context = RenderContext::new(UserType::New, LayoutStyle::QuestionByQuestion);
    let html = render(&online_seminar::config(), &FieldCatalogue::empty(), &context);
    assert!(html.contains("There are no questions to preview."));
    assert!(control_lines(&html).is_empty());
}

#[test]
fn existing_user_sees_sample_date_of_birth() {
    let catalogue = FieldCatalogue::new(vec![
        FieldDescriptor::date("dob", "Date of Birth", Section::Personal).with_prefilled(true),
    ])
    .unwrap();
    let context = RenderContext::new(UserType::Existing, LayoutStyle::SingleColumn);
    let html = render(&online_seminar::config(), &catalogue, &context);

    let control = control_lines(&html)
        .into_iter()
        .find(|l| l.contains("id=\"dob\""))
        .unwrap();
    assert!(control.contains("value=\"John Doe\""));
    assert!(control.contains(" readonly"));
}

#[test]
fn helper_text_is_rendered_and_escaped() {
    let catalogue = FieldCatalogue::new(vec![
        FieldDescriptor::file("idPicture", "ID Picture", Section::Personal)
            .with_helper_text("Passport <or> national ID"),
        FieldDescriptor::text("city", "City", Section::Personal),
    ])
    .unwrap();
    let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
    let html = render(&online_seminar::config(), &catalogue, &context);

    assert!(html.contains("<p class=\"regform-helper\">Passport &lt;or&gt; national ID</p>"));
    assert_eq!(html.matches("regform-helper\"").count(), 1);
}

#[test]
fn collapsed_sections_fold_to_their_heading() {
    let config = offline_workshop::config();
    let context = RenderContext::from_config(&config).with_collapsed(Section::Travel);
    let html = render(&config, &canonical_catalogue(), &context);

    assert!(html.contains("<details class=\"regform-card\" data-section=\"personal\" open>"));
    assert!(html.contains("<details class=\"regform-card\" data-section=\"travel\">"));
    assert!(html.contains("<summary><h2>Travel Information</h2></summary>"));
    assert!(!html.contains("id=\"airlineName\""));
}
