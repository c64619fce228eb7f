use anyhow::Result;
use colored::Colorize;
use rusty_enrol::{Catalog, EnrolConfig, Field, MenuKind, NavParams, StudentInfoForm};

use crate::CheckArgs;

pub fn execute(args: CheckArgs, mut config: EnrolConfig) -> Result<()> {
    if let Some(locale) = args.locale {
        config.ui.locale = locale;
    }
    let catalog = Catalog::from_config(&config.ui)?;

    let mut form = StudentInfoForm::with_rules(
        NavParams {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
        },
        config.rules,
    )?;

    if let Some(language) = args.native {
        form.open_menu(MenuKind::Native);
        form.select_language(MenuKind::Native, language);
    }
    if let Some(language) = args.preferred {
        form.open_menu(MenuKind::Preferred);
        form.select_language(MenuKind::Preferred, language);
    }
    // Errors are shown per field by print_fields
    if let Some(name) = args.preferred_name {
        if let Err(err) = form.set_preferred_name(name) {
            tracing::debug!(%err, "preferred name rejected");
        }
    }
    if let Some(password) = args.password {
        if let Err(err) = form.set_password(password) {
            tracing::debug!(%err, "password rejected");
        }
    }
    if args.show_password {
        form.toggle_password_visibility();
    }

    println!("{}", form.greeting(&catalog).green().bold());
    println!();

    form.request_submit();
    let outcome = form.confirm();

    print_fields(&form, &catalog);
    println!();

    match outcome {
        Ok(registration) => {
            println!("{}", form.summary().title(&catalog).bold());
            for (label, value) in form.summary().render(&catalog) {
                println!("  {:<20} {}", format!("{}:", label), value.cyan());
            }
            println!();
            println!(
                "{} {}",
                "✓".green(),
                catalog.translate("common_confirm").green().bold()
            );
            tracing::debug!(email = %registration.email, "registration accepted");
            Ok(())
        }
        Err(errors) => {
            for (field, err) in errors.iter() {
                println!("  {} {}: {}", "✗".red(), field.name(), err);
            }
            anyhow::bail!("{}", errors)
        }
    }
}

fn print_fields(form: &StudentInfoForm, catalog: &Catalog) {
    for field in Field::ALL {
        let label = catalog.translate(field.label_key());
        let value = match field {
            Field::Password => form.displayed_password(),
            Field::NativeLanguage => form.language_label(MenuKind::Native, catalog),
            Field::PreferredLanguage => form.language_label(MenuKind::Preferred, catalog),
            _ => form.value(field).to_string(),
        };
        let helper = form.helper_text(field, catalog);

        if form.is_valid(field) {
            println!("  {} {:<20} {}", "✓".green(), label, value);
            println!("    {}", helper.dimmed());
        } else {
            println!("  {} {:<20} {}", "✗".red(), label, value);
            println!("    {}", helper.red());
        }
    }
}
