//! Sample beans shared by form tests and the demo.

use metaform_meta::{
    cached_meta, extract, Bean, BeanMeta, Constraints, DeclaredType, EnumType, MetaError,
    MetaSlot, NaiveDate, Primitive, ValidateRule, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const COLOUR: EnumType = EnumType::new("Colour", &["RED", "GREEN", "BLUE", "DARK_GREY"]);

/// A person with one property of every kind the default registry renders,
/// plus a nested address that has no factory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub forename: String,
    pub surname: String,
    pub age: i16,
    pub trip_count: i32,
    pub success_ratio: f64,
    pub child: bool,
    pub married: Option<bool>,
    pub favourite_colour: Option<&'static str>,
    pub birthday: Option<NaiveDate>,
    pub nicknames: Vec<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
}

thread_local! {
    static PERSON_META: MetaSlot<Person> = const { RefCell::new(None) };
    static ADDRESS_META: MetaSlot<Address> = const { RefCell::new(None) };
    static SCORE_META: MetaSlot<Score> = const { RefCell::new(None) };
    static WALLET_META: MetaSlot<Wallet> = const { RefCell::new(None) };
}

impl Bean for Person {
    fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError> {
        cached_meta(&PERSON_META, build_person_meta)
    }
}

fn build_person_meta() -> Result<BeanMeta<Person>, MetaError> {
    BeanMeta::<Person>::builder("Person", module_path!())
        .constrained(
            "forename",
            DeclaredType::Text,
            Constraints::new().not_null().size(1, 30),
            |p| Value::Text(p.forename.clone()),
            |p, v| {
                p.forename = extract::text("forename", v)?;
                Ok(())
            },
        )
        .constrained(
            "surname",
            DeclaredType::Text,
            Constraints::new().validate(ValidateRule::NotEmpty),
            |p| Value::Text(p.surname.clone()),
            |p, v| {
                p.surname = extract::text("surname", v)?;
                Ok(())
            },
        )
        .constrained(
            "age",
            DeclaredType::I16,
            Constraints::new().range(0, 150),
            |p| Value::Int(p.age.into()),
            |p, v| {
                p.age = extract::int("age", DeclaredType::I16, v)?;
                Ok(())
            },
        )
        .property(
            "trip_count",
            DeclaredType::I32,
            |p| Value::Int(p.trip_count.into()),
            |p, v| {
                p.trip_count = extract::int("trip_count", DeclaredType::I32, v)?;
                Ok(())
            },
        )
        .property(
            "success_ratio",
            DeclaredType::F64,
            |p| Value::Float(p.success_ratio),
            |p, v| {
                p.success_ratio = extract::float("success_ratio", DeclaredType::F64, v)?;
                Ok(())
            },
        )
        .property(
            "child",
            DeclaredType::BOOL,
            |p| Value::Bool(p.child),
            |p, v| {
                p.child = extract::boolean("child", DeclaredType::BOOL, v)?;
                Ok(())
            },
        )
        .property(
            "married",
            DeclaredType::Boxed(Primitive::Bool),
            |p| p.married.into(),
            |p, v| {
                p.married = extract::opt_boolean("married", DeclaredType::Boxed(Primitive::Bool), v)?;
                Ok(())
            },
        )
        .property(
            "favourite_colour",
            DeclaredType::Enum(COLOUR),
            |p| p.favourite_colour.map_or(Value::Null, Value::Enum),
            |p, v| {
                p.favourite_colour = extract::member("favourite_colour", COLOUR, v)?;
                Ok(())
            },
        )
        .property(
            "birthday",
            DeclaredType::Date,
            |p| p.birthday.map_or(Value::Null, Value::Date),
            |p, v| {
                p.birthday = extract::opt_date("birthday", v)?;
                Ok(())
            },
        )
        .constrained(
            "nicknames",
            DeclaredType::TextList,
            Constraints::new().size(0, 3),
            |p| Value::List(p.nicknames.clone()),
            |p, v| {
                p.nicknames = extract::list("nicknames", v)?;
                Ok(())
            },
        )
        .property(
            "address",
            DeclaredType::Bean("Address"),
            |_| Value::Null,
            |_, _| Ok(()),
        )
        .build()
}

impl Bean for Address {
    fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError> {
        cached_meta(&ADDRESS_META, || {
            BeanMeta::<Address>::builder("Address", module_path!())
                .property(
                    "street",
                    DeclaredType::Text,
                    |a| Value::Text(a.street.clone()),
                    |a, v| {
                        a.street = extract::text("street", v)?;
                        Ok(())
                    },
                )
                .property(
                    "city",
                    DeclaredType::Text,
                    |a| Value::Text(a.city.clone()),
                    |a, v| {
                        a.city = extract::text("city", v)?;
                        Ok(())
                    },
                )
                .build()
        })
    }
}

/// Percent score with an optional weighting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Score {
    pub points: i32,
    pub weight: Option<f32>,
    pub note: Option<i64>,
}

impl Bean for Score {
    fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError> {
        cached_meta(&SCORE_META, || {
            BeanMeta::<Score>::builder("Score", module_path!())
                .constrained(
                    "points",
                    DeclaredType::I32,
                    Constraints::new().range(0, 100),
                    |s| Value::Int(s.points.into()),
                    |s, v| {
                        s.points = extract::int("points", DeclaredType::I32, v)?;
                        Ok(())
                    },
                )
                .property(
                    "weight",
                    DeclaredType::Boxed(Primitive::F32),
                    |s| s.weight.map_or(Value::Null, |w| Value::Float(w.into())),
                    |s, v| {
                        s.weight = match v {
                            Value::Null => None,
                            other => Some(
                                extract::float("weight", DeclaredType::Boxed(Primitive::F32), other)?
                                    as f32,
                            ),
                        };
                        Ok(())
                    },
                )
                .property(
                    "note",
                    DeclaredType::Boxed(Primitive::I64),
                    |s| s.note.map_or(Value::Null, Value::Int),
                    |s, v| {
                        s.note = extract::opt_int("note", DeclaredType::Boxed(Primitive::I64), v)?;
                        Ok(())
                    },
                )
                .build()
        })
    }
}

/// Coded scalars: an optional currency and a required home time zone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wallet {
    pub currency: Option<String>,
    pub home_zone: String,
}

impl Bean for Wallet {
    fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError> {
        cached_meta(&WALLET_META, || {
            BeanMeta::<Wallet>::builder("Wallet", module_path!())
                .property(
                    "currency",
                    DeclaredType::Named("Currency"),
                    |w| w.currency.clone().map_or(Value::Null, Value::Text),
                    |w, v| {
                        w.currency = match v {
                            Value::Null => None,
                            other => Some(extract::text("currency", other)?),
                        };
                        Ok(())
                    },
                )
                .constrained(
                    "home_zone",
                    DeclaredType::Named("TimeZone"),
                    Constraints::new().not_null(),
                    |w| Value::Text(w.home_zone.clone()),
                    |w, v| {
                        w.home_zone = extract::text("home_zone", v)?;
                        Ok(())
                    },
                )
                .build()
        })
    }
}

/// A person with sample values filled in.
pub fn sample_person() -> Person {
    Person {
        forename: "Ada".into(),
        surname: "Lovelace".into(),
        age: 42,
        trip_count: 7,
        success_ratio: 0.5,
        child: false,
        married: Some(true),
        favourite_colour: Some("DARK_GREY"),
        birthday: NaiveDate::from_ymd_opt(1980, 2, 29),
        nicknames: vec!["Steve".into()],
        address: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_cached_per_thread() {
        let first = Person::bean_meta().expect("valid table");
        let second = Person::bean_meta().expect("valid table");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 11);
    }

    #[test]
    fn accessors_round_trip() {
        let meta = Person::bean_meta().expect("valid table");
        let mut person = Person::default();
        let colour = meta.property("favourite_colour").expect("declared");
        colour
            .set(&mut person, Value::Enum("GREEN"))
            .expect("member exists");
        assert_eq!(colour.get(&person), Value::Enum("GREEN"));
        assert!(colour.set(&mut person, Value::Int(3)).is_err());
    }
}
