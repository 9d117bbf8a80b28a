use metaform_form::{create_form, FormSettings};
use metaform_testing::fixtures::{sample_person, Person};
use metaform_testing::FieldRobot;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn texts(form: &metaform_form::Form<Person>, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| FieldRobot::new(form.component(name).expect("rendered")).text())
        .collect()
}

proptest! {
    #[test]
    fn commit_then_update_ui_is_stable(
        age in 0i16..=150,
        trips in any::<i32>(),
        ratio in -1.0e6f64..1.0e6,
    ) {
        let person = Person { age, trip_count: trips, success_ratio: ratio, ..sample_person() };
        let bean = Rc::new(RefCell::new(person.clone()));
        let form = create_form(&FormSettings::default(), Rc::clone(&bean)).expect("form builds");
        let names = ["age", "trip_count", "success_ratio"];
        let shown = texts(&form, &names);

        prop_assert!(form.commit().is_success());
        prop_assert_eq!(&*bean.borrow(), &person);
        form.update_ui();
        prop_assert_eq!(texts(&form, &names), shown);
    }
}
