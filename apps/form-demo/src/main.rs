mod booking;

use anyhow::{anyhow, Context};
use booking::Booking;
use metaform_form::{create_form, Form, FormSettings};
use metaform_ui::{FocusEvent, KeyCode, KeyEvent, Modifiers, WidgetHandle};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== metaform demo ===");
    println!("A booking form is synthesized from the Booking property table,");
    println!("then a scripted user types into it and commits.");
    println!();

    let booking = Rc::new(RefCell::new(Booking {
        nights: 1,
        nightly_rate: 120.0,
        ..Booking::default()
    }));
    let form = create_form(&FormSettings::default(), Rc::clone(&booking))
        .context("building the booking form")?;
    print_form(&form);

    println!("-- first attempt: missing guest, too many nights, bad date");
    type_into(&form, "nights", "30")?;
    type_into(&form, "arrival", "2026-02-30")?;
    type_into(&form, "guest", "x")?;
    report_commit(&form);

    println!("-- second attempt");
    type_into(&form, "guest", "Mira Okafor")?;
    type_into(&form, "nights", "3")?;
    type_into(&form, "nightly_rate", "99.50")?;
    type_into(&form, "arrival", "2026-11-02")?;
    widget(&form, "room")?
        .as_choice()
        .ok_or_else(|| anyhow!("room is not a choice"))?
        .select("SEA_VIEW")?;
    widget(&form, "breakfast")?
        .as_toggle()
        .ok_or_else(|| anyhow!("breakfast is not a toggle"))?
        .select(Some(true))?;
    widget(&form, "companions")?
        .as_list()
        .ok_or_else(|| anyhow!("companions is not a list"))?
        .add("Jun Okafor")?;
    report_commit(&form);

    form.update_ui();
    print_form(&form);
    println!("{:#?}", booking.borrow());
    Ok(())
}

fn widget(form: &Form<Booking>, name: &str) -> anyhow::Result<WidgetHandle> {
    form.component(name)
        .ok_or_else(|| anyhow!("no rendered field `{name}`"))
}

/// Replaces the field text keystroke by keystroke, then tabs away.
fn type_into(form: &Form<Booking>, name: &str, text: &str) -> anyhow::Result<()> {
    let widget = widget(form, name)?;
    widget.handle_key_event(&KeyEvent::key_down_with_modifiers(KeyCode::A, Modifiers::COMMAND));
    widget.handle_key_event(&KeyEvent::key_down(KeyCode::Backspace));
    for ch in text.chars() {
        widget.handle_key_event(&KeyEvent::character(ch));
    }
    widget.handle_focus_event(FocusEvent::LOST);
    let shown = widget.as_text().map(|field| field.text()).unwrap_or_default();
    println!(
        "typed {text:?} into {name}: shows {shown:?}, {}",
        widget.error_status()
    );
    Ok(())
}

fn report_commit(form: &Form<Booking>) {
    let report = form.commit();
    if report.is_success() {
        println!("commit succeeded");
    } else {
        for (name, _) in report.failures() {
            let message = form.error_text(name).unwrap_or_default();
            println!("  {name}: {message}");
        }
    }
    println!();
}

fn print_form(form: &Form<Booking>) {
    for field in form.fields() {
        let value = match field.widget() {
            WidgetHandle::Text(text) => text.text(),
            WidgetHandle::Toggle(toggle) => format!("{:?}", toggle.selection()),
            WidgetHandle::Choice(choice) => choice.selected_label().unwrap_or_default(),
            WidgetHandle::List(list) => list.items().join(", "),
        };
        println!("{:<18} {value}", field.label());
    }
    println!();
}
