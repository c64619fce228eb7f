/// End-to-end behaviour of the registration form: inline validation, language
/// menus, and the submit -> confirm / cancel dialog flow.
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use rusty_enrol::rules::{EmailError, NameError, PasswordError, Rules, RulesError};
use rusty_enrol::types::Language;
use rusty_enrol::{
    Catalog, Field, FieldError, MenuKind, NavParams, StudentInfoForm, Validate, ValidationResult,
};

#[fixture]
fn catalog() -> Catalog {
    Catalog::english().unwrap()
}

#[fixture]
fn form() -> StudentInfoForm {
    StudentInfoForm::new(NavParams {
        first_name: Some("Olena".to_string()),
        last_name: Some("Shevchenko".to_string()),
        email: Some("olena@uni.edu".to_string()),
    })
}

fn complete(form: &mut StudentInfoForm) {
    form.select_language(MenuKind::Native, Language::Uk);
    form.select_language(MenuKind::Preferred, Language::En);
    form.set_password("Abc123!@").unwrap();
}

#[rstest]
fn test_opens_with_navigation_params(form: StudentInfoForm) {
    assert_eq!(form.value(Field::FirstName), "Olena");
    assert_eq!(form.value(Field::PreferredName), "Olena");
    assert_eq!(form.value(Field::LastName), "Shevchenko");
    assert_eq!(form.value(Field::Email), "olena@uni.edu");
    assert_eq!(form.value(Field::Password), "");
    assert_eq!(form.value(Field::NativeLanguage), "");
}

#[rstest]
fn test_fresh_form_shows_no_errors(catalog: Catalog) {
    let form = StudentInfoForm::new(NavParams::default());

    for field in Field::ALL {
        assert!(form.is_valid(field), "{:?} should start valid", field);
        assert_eq!(
            form.helper_text(field, &catalog),
            catalog.translate(field.helper_key())
        );
    }
    assert!(!form.is_dialog_open());
    assert!(!form.is_menu_open(MenuKind::Native));
    assert!(!form.is_menu_open(MenuKind::Preferred));
    assert!(!form.is_password_visible());
}

#[rstest]
fn test_editing_a_name_validates_it(mut form: StudentInfoForm, catalog: Catalog) {
    assert_eq!(
        form.set_first_name("O"),
        Err(FieldError::Name(NameError::TooShort))
    );
    assert_eq!(
        form.helper_text(Field::FirstName, &catalog),
        "First name must be at least 2 characters."
    );

    assert_eq!(
        form.set_first_name("Olena1"),
        Err(FieldError::Name(NameError::InvalidChars))
    );
    assert_eq!(
        form.helper_text(Field::FirstName, &catalog),
        "First name may only contain letters."
    );

    assert_eq!(form.set_first_name("Olenka"), Ok(()));
    assert!(form.is_valid(Field::FirstName));
    assert_eq!(
        form.helper_text(Field::FirstName, &catalog),
        "Your legal first name."
    );
}

#[rstest]
fn test_each_name_field_has_its_own_texts(mut form: StudentInfoForm, catalog: Catalog) {
    let long = "a".repeat(31);
    form.set_preferred_name(long.clone()).unwrap_err();
    form.set_last_name(long).unwrap_err();

    assert_eq!(
        form.helper_text(Field::PreferredName, &catalog),
        "Preferred name must be at most 30 characters."
    );
    assert_eq!(
        form.helper_text(Field::LastName, &catalog),
        "Last name must be at most 30 characters."
    );
    assert!(form.is_valid(Field::FirstName));
}

#[rstest]
#[case("Abc123!@", None)]
#[case("abc123!@", Some(PasswordError::MissingUppercase))]
#[case("ABCDEFGH", Some(PasswordError::MissingLowercase))]
#[case("Abc1!", Some(PasswordError::TooShort))]
#[case("Abcdefghijk123!@#", Some(PasswordError::TooLong))]
fn test_password_input(
    mut form: StudentInfoForm,
    #[case] password: &str,
    #[case] expected: Option<PasswordError>,
) {
    let outcome = form.set_password(password);
    assert_eq!(outcome.err(), expected.map(FieldError::Password));
    assert_eq!(form.error(Field::Password), expected.map(FieldError::Password));
}

#[rstest]
fn test_email_input(mut form: StudentInfoForm, catalog: Catalog) {
    assert_eq!(
        form.set_email("a@b"),
        Err(FieldError::Email(EmailError::InvalidFormat))
    );
    assert_eq!(
        form.helper_text(Field::Email, &catalog),
        "Please enter a valid email address."
    );
    assert_eq!(form.set_email("a@b.com"), Ok(()));
}

#[rstest]
fn test_language_menus(mut form: StudentInfoForm, catalog: Catalog) {
    assert_eq!(
        form.language_label(MenuKind::Native, &catalog),
        "Select your native language"
    );

    form.open_menu(MenuKind::Native);
    assert!(form.is_menu_open(MenuKind::Native));
    assert!(!form.is_menu_open(MenuKind::Preferred));

    form.dismiss_menu(MenuKind::Native);
    assert!(!form.is_menu_open(MenuKind::Native));
    assert_eq!(form.language(MenuKind::Native), None);

    form.open_menu(MenuKind::Native);
    form.select_language(MenuKind::Native, Language::Ru);
    assert!(!form.is_menu_open(MenuKind::Native));
    assert_eq!(form.language(MenuKind::Native), Some(Language::Ru));
    assert_eq!(form.language_label(MenuKind::Native, &catalog), "Русский язык");
    assert_eq!(form.value(Field::NativeLanguage), "Русский язык");

    assert_eq!(form.menu_items(MenuKind::Preferred)[0], Language::En);
    assert_eq!(form.menu_items(MenuKind::Native)[0], Language::Uk);
}

#[rstest]
fn test_password_visibility(mut form: StudentInfoForm) {
    form.set_password("Abc123!@").unwrap();
    assert_eq!(form.displayed_password(), "••••••••");

    form.toggle_password_visibility();
    assert!(form.is_password_visible());
    assert_eq!(form.displayed_password(), "Abc123!@");

    form.toggle_password_visibility();
    assert!(!form.is_password_visible());
}

#[rstest]
fn test_greeting_follows_first_name(mut form: StudentInfoForm, catalog: Catalog) {
    assert_eq!(form.greeting(&catalog), "Welcome, Olena!");
    form.set_first_name("Taras").unwrap();
    assert_eq!(form.greeting(&catalog), "Welcome, Taras!");
}

#[rstest]
fn test_summary_never_contains_password(mut form: StudentInfoForm, catalog: Catalog) {
    complete(&mut form);
    let summary = form.summary();

    assert_eq!(
        summary.render(&catalog),
        vec![
            ("Native language".to_string(), "Українська мова".to_string()),
            ("Preferred language".to_string(), "English".to_string()),
            ("First name".to_string(), "Olena".to_string()),
            ("Preferred name".to_string(), "Olena".to_string()),
            ("Last name".to_string(), "Shevchenko".to_string()),
            ("Email address".to_string(), "olena@uni.edu".to_string()),
        ]
    );
    assert!(summary.rows.iter().all(|row| row.field != Field::Password));
}

#[rstest]
fn test_cancel_closes_dialog(mut form: StudentInfoForm) {
    form.request_submit();
    assert!(form.is_dialog_open());

    form.cancel();
    assert!(!form.is_dialog_open());
    assert_eq!(form.language(MenuKind::Native), None);
}

#[rstest]
fn test_confirm_incomplete_form(mut form: StudentInfoForm, catalog: Catalog) {
    form.request_submit();
    let errors = form.confirm().unwrap_err();

    assert!(!form.is_dialog_open());
    assert_eq!(
        errors.fields(),
        vec![Field::NativeLanguage, Field::PreferredLanguage, Field::Password]
    );
    assert_eq!(errors.get(Field::NativeLanguage), Some(FieldError::Unselected));
    assert_eq!(
        errors.get(Field::Password),
        Some(FieldError::Password(PasswordError::TooShort))
    );

    // invalid fields now show their error text
    assert_eq!(
        form.helper_text(Field::PreferredLanguage, &catalog),
        "Select your preferred language"
    );
    assert_eq!(
        form.helper_text(Field::Password, &catalog),
        "Password must be at least 8 characters."
    );

    // choosing a language clears its error
    form.select_language(MenuKind::Native, Language::De);
    assert!(form.is_valid(Field::NativeLanguage));
}

#[rstest]
fn test_confirm_complete_form(mut form: StudentInfoForm) {
    complete(&mut form);
    form.set_preferred_name("Lena").unwrap();

    form.request_submit();
    let registration = form.confirm().unwrap();

    assert!(!form.is_dialog_open());
    assert_eq!(registration.native_language, Language::Uk);
    assert_eq!(registration.preferred_language, Language::En);
    assert_eq!(registration.first_name.as_ref(), "Olena");
    assert_eq!(registration.preferred_name.as_ref(), "Lena");
    assert_eq!(registration.last_name.as_ref(), "Shevchenko");
    assert_eq!(registration.email.as_ref(), "olena@uni.edu");
    assert_eq!(registration.password.as_ref(), "Abc123!@");
    assert!(!format!("{:?}", registration).contains("Abc123!@"));
}

#[rstest]
fn test_confirm_checks_prefilled_values() {
    let mut form = StudentInfoForm::new(NavParams {
        first_name: Some("O".to_string()),
        last_name: None,
        email: Some("not-an-email".to_string()),
    });
    complete(&mut form);

    let errors = form.confirm().unwrap_err();
    assert_eq!(
        errors.fields(),
        vec![
            Field::FirstName,
            Field::PreferredName,
            Field::LastName,
            Field::Email
        ]
    );
    assert_eq!(
        errors.get(Field::LastName),
        Some(FieldError::Name(NameError::TooShort))
    );
}

#[rstest]
fn test_validate_trait_does_not_mark_fields(form: StudentInfoForm) {
    let result = ValidationResult::from_result(form.validate());

    assert!(!result.is_valid);
    assert_eq!(
        result.get_error("password").map(String::as_str),
        Some("password is too short")
    );
    assert_eq!(
        result.get_error("native_language").map(String::as_str),
        Some("no language selected")
    );
    assert!(result.get_error("first_name").is_none());
    assert!(form.is_valid(Field::Password));
}

#[rstest]
fn test_validate_trait_accepts_complete_form(mut form: StudentInfoForm) {
    complete(&mut form);
    assert!(form.validate().is_ok());
}

#[rstest]
fn test_configured_rules_apply_inline() {
    let mut rules = Rules::default();
    rules.name.min_length = 3;
    let mut form = StudentInfoForm::with_rules(NavParams::default(), rules).unwrap();

    assert_eq!(
        form.set_first_name("Al"),
        Err(FieldError::Name(NameError::TooShort))
    );
    assert_eq!(form.set_first_name("Ala"), Ok(()));
}

#[rstest]
fn test_rules_looser_than_typed_values_are_rejected() {
    let mut rules = Rules::default();
    rules.password.max_length = 32;
    assert!(matches!(
        StudentInfoForm::with_rules(NavParams::default(), rules),
        Err(RulesError::LooserThanDefault { rule: "password", .. })
    ));

    let mut rules = Rules::default();
    rules.name.min_length = 10;
    rules.name.max_length = 3;
    assert!(StudentInfoForm::with_rules(NavParams::default(), rules).is_err());
}

#[rstest]
#[case("Abcdef12!@", "Olena", true)]
#[case("Abcdef12!@#$", "Olena", true)]
#[case("Abc123!@", "Olena", false)]
#[case("Abcdef12!@", "Oleksandra", false)]
#[case("Abcdef12?#", "Olena", false)]
#[case("Abcdefghijkl12!@", "Olena", false)]
fn test_validated_form_always_confirms(
    #[case] password: &str,
    #[case] first_name: &str,
    #[case] expected: bool,
) {
    let mut rules = Rules::default();
    rules.name.max_length = 8;
    rules.password.min_length = 10;
    rules.password.max_length = 12;
    rules.password.special_chars = "!@".to_string();

    let mut form = StudentInfoForm::with_rules(
        NavParams {
            first_name: Some(first_name.to_string()),
            last_name: Some("Koval".to_string()),
            email: Some("olena@uni.edu".to_string()),
        },
        rules,
    )
    .unwrap();
    form.select_language(MenuKind::Native, Language::Uk);
    form.select_language(MenuKind::Preferred, Language::En);
    form.set_password(password).ok();

    assert_eq!(form.validate().is_ok(), expected);
    assert_eq!(form.confirm().is_ok(), expected);
}

#[rstest]
fn test_german_texts(mut form: StudentInfoForm) {
    let catalog = Catalog::load("de").unwrap();
    form.set_email("a@b").unwrap_err();

    assert_eq!(
        form.helper_text(Field::Email, &catalog),
        "Bitte gib eine gültige E-Mail-Adresse ein."
    );
    assert_eq!(form.greeting(&catalog), "Willkommen, Olena!");
}
