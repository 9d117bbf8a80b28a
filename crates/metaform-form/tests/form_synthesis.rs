use metaform_form::{ComponentFactory, ComponentRegistry, FormSettings, FormSynthesizer};
use metaform_form::{create_form, Form};
use metaform_meta::{Bean, Bound, DeclaredType};
use metaform_testing::fixtures::{Person, Score, COLOUR};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn person_fields_follow_declaration_order() {
    let registry = ComponentRegistry::with_defaults();
    let meta = Person::bean_meta().expect("valid table");
    let descriptor = FormSynthesizer::new(&registry)
        .synthesize(&meta)
        .expect("synthesizes");

    let names: Vec<_> = descriptor.fields().iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        [
            "forename",
            "surname",
            "age",
            "trip_count",
            "success_ratio",
            "child",
            "married",
            "favourite_colour",
            "birthday",
            "nicknames",
            "address",
        ]
    );

    let age = descriptor.field("age").expect("age");
    assert!(age.is_mandatory());
    assert_eq!(age.min_value(), Some(Bound::Int(0)));
    assert_eq!(age.max_value(), Some(Bound::Int(150)));

    let forename = descriptor.field("forename").expect("forename");
    assert!(forename.is_mandatory());
    assert_eq!((forename.min_size(), forename.max_size()), (1, 30));

    let surname = descriptor.field("surname").expect("surname");
    assert!(surname.is_mandatory());
    assert_eq!((surname.min_size(), surname.max_size()), (0, usize::MAX));

    let married = descriptor.field("married").expect("married");
    assert!(!married.is_mandatory());
    assert_eq!(married.component_factory(), Some(ComponentFactory::Toggle));

    let colour = descriptor.field("favourite_colour").expect("colour");
    assert_eq!(colour.selectable_values(), Some(COLOUR.members));
    assert_eq!(colour.component_factory(), Some(ComponentFactory::Choice));

    let address = descriptor.field("address").expect("address");
    assert_eq!(address.declared_type(), DeclaredType::Bean("Address"));
    assert_eq!(address.component_factory(), None);
}

#[test]
fn form_skips_unresolved_fields_and_labels_the_rest() {
    let person = Rc::new(RefCell::new(Person::default()));
    let form = create_form(&FormSettings::default(), person).expect("form builds");

    let labels: Vec<_> = form.fields().iter().map(|f| f.label()).collect();
    assert_eq!(
        labels,
        [
            "Forename:*",
            "Surname:*",
            "Age:*",
            "Trip count:*",
            "Success ratio:*",
            "Child:*",
            "Married:*",
            "Favourite colour:",
            "Birthday:",
            "Nicknames:",
        ]
    );
    assert!(form.component("address").is_none());
    assert_eq!(form.descriptor().len(), 11);
}

#[test]
fn empty_registry_still_renders_enumerations() {
    let settings = FormSettings::default().with_registry(ComponentRegistry::new());
    let person = Rc::new(RefCell::new(Person::default()));
    let form = create_form(&settings, person).expect("form builds");
    let names: Vec<_> = form.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["favourite_colour"]);
}

#[test]
fn unregistering_a_type_drops_its_fields() {
    let mut registry = ComponentRegistry::with_defaults();
    registry.unregister(&DeclaredType::Text);
    let settings = FormSettings::default().with_registry(registry);
    let form = create_form(&settings, Rc::new(RefCell::new(Person::default()))).expect("form builds");
    assert!(form.component("forename").is_none());
    assert!(form.component("surname").is_none());
    assert_eq!(form.fields().len(), 8);
}

#[test]
fn replaced_fields_change_the_built_form() {
    let settings = FormSettings::default();
    let meta = Score::bean_meta().expect("valid table");
    let mut descriptor = FormSynthesizer::new(&settings.registry)
        .synthesize(&meta)
        .expect("synthesizes");
    let reordered = descriptor.fields().iter().rev().cloned().collect();
    descriptor.replace_fields(reordered);

    let form = Form::build(&settings, descriptor, Rc::new(RefCell::new(Score::default())))
        .expect("form builds");
    let names: Vec<_> = form.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["note", "weight", "points"]);
}
