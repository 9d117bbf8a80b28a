//! The bean edited by the demo.

use metaform_meta::{
    cached_meta, extract, Bean, BeanMeta, Constraints, DeclaredType, EnumType, MetaError,
    MetaSlot, NaiveDate, Primitive, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const ROOM: EnumType = EnumType::new("Room", &["STANDARD", "SEA_VIEW", "SUITE"]);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Booking {
    pub guest: String,
    pub nights: i16,
    pub nightly_rate: f64,
    pub breakfast: bool,
    pub late_checkout: Option<bool>,
    pub room: Option<&'static str>,
    pub arrival: Option<NaiveDate>,
    pub companions: Vec<String>,
}

thread_local! {
    static META: MetaSlot<Booking> = const { RefCell::new(None) };
}

impl Bean for Booking {
    fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError> {
        cached_meta(&META, build_meta)
    }
}

fn build_meta() -> Result<BeanMeta<Booking>, MetaError> {
    BeanMeta::<Booking>::builder("Booking", module_path!())
        .constrained(
            "guest",
            DeclaredType::Text,
            Constraints::new().not_null().size(2, 40),
            |b| Value::Text(b.guest.clone()),
            |b, v| {
                b.guest = extract::text("guest", v)?;
                Ok(())
            },
        )
        .constrained(
            "nights",
            DeclaredType::I16,
            Constraints::new().range(1, 28),
            |b| Value::Int(b.nights.into()),
            |b, v| {
                b.nights = extract::int("nights", DeclaredType::I16, v)?;
                Ok(())
            },
        )
        .property(
            "nightly_rate",
            DeclaredType::F64,
            |b| Value::Float(b.nightly_rate),
            |b, v| {
                b.nightly_rate = extract::float("nightly_rate", DeclaredType::F64, v)?;
                Ok(())
            },
        )
        .property(
            "breakfast",
            DeclaredType::BOOL,
            |b| Value::Bool(b.breakfast),
            |b, v| {
                b.breakfast = extract::boolean("breakfast", DeclaredType::BOOL, v)?;
                Ok(())
            },
        )
        .property(
            "late_checkout",
            DeclaredType::Boxed(Primitive::Bool),
            |b| b.late_checkout.into(),
            |b, v| {
                b.late_checkout =
                    extract::opt_boolean("late_checkout", DeclaredType::Boxed(Primitive::Bool), v)?;
                Ok(())
            },
        )
        .constrained(
            "room",
            DeclaredType::Enum(ROOM),
            Constraints::new().not_null(),
            |b| b.room.map_or(Value::Null, Value::Enum),
            |b, v| {
                b.room = extract::member("room", ROOM, v)?;
                Ok(())
            },
        )
        .property(
            "arrival",
            DeclaredType::Date,
            |b| b.arrival.map_or(Value::Null, Value::Date),
            |b, v| {
                b.arrival = extract::opt_date("arrival", v)?;
                Ok(())
            },
        )
        .constrained(
            "companions",
            DeclaredType::TextList,
            Constraints::new().size(0, 4),
            |b| Value::List(b.companions.clone()),
            |b, v| {
                b.companions = extract::list("companions", v)?;
                Ok(())
            },
        )
        .build()
}
