//! Mappable fixtures shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    mapping_enum, Constructor, Field, Getter, Mappable, ObjectType, Param, Setter, TypeDescriptor,
};

mapping_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Tier { Free, Pro }
}

/// Setter-populated, with one private field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Secret {
    pub value: String,
    pub rotation: i32,
}

impl Mappable for Secret {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Secret>("Secret")
            .marked()
            .field(Field::new("value", |s: &Secret| s.value.clone(), |s: &mut Secret, v| s.value = v))
            .field(
                Field::new("rotation", |s: &Secret| s.rotation, |s: &mut Secret, v| s.rotation = v)
                    .private(),
            )
            .setter(Setter::new("set_value", |s: &mut Secret, v: String| s.value = v))
            .default_constructor(Secret::default)
            .build()
    }
}

/// Constructor-built, written through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub tier: Tier,
    pub secret: Secret,
    pub limits: Vec<i64>,
}

impl Plan {
    pub fn sample() -> Self {
        Plan {
            id: 42,
            name: "starter".into(),
            tier: Tier::Pro,
            secret: Secret {
                value: "s3cr3t".into(),
                rotation: 0,
            },
            limits: vec![10, 20],
        }
    }
}

impl Mappable for Plan {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Plan>("Plan")
            .marked()
            .field(Field::new("id", |p: &Plan| p.id, |p: &mut Plan, v| p.id = v))
            .field(Field::new("name", |p: &Plan| p.name.clone(), |p: &mut Plan, v| p.name = v))
            .field(Field::new("tier", |p: &Plan| p.tier, |p: &mut Plan, v| p.tier = v))
            .field(Field::new("secret", |p: &Plan| p.secret.clone(), |p: &mut Plan, v| p.secret = v))
            .field(Field::new("limits", |p: &Plan| p.limits.clone(), |p: &mut Plan, v| p.limits = v))
            .getter(Getter::new("get_id", |p: &Plan| p.id).property())
            .getter(Getter::new("get_name", |p: &Plan| p.name.clone()).property())
            .getter(Getter::new("get_tier", |p: &Plan| p.tier).property())
            .getter(Getter::new("get_secret", |p: &Plan| p.secret.clone()).property())
            .getter(Getter::new("get_limits", |p: &Plan| p.limits.clone()).property())
            .constructor(Constructor::new(
                [
                    Param::of::<i64>().alias("id"),
                    Param::of::<String>().alias("name"),
                    Param::of::<Tier>().alias("tier"),
                    Param::of::<Secret>().alias("secret"),
                    Param::of::<Vec<i64>>().alias("limits"),
                ],
                |args| {
                    Ok(Plan {
                        id: args.take::<Option<i64>>()?.unwrap_or_default(),
                        name: args.take::<Option<String>>()?.unwrap_or_default(),
                        tier: args.take::<Option<Tier>>()?.unwrap_or(Tier::Free),
                        secret: args.take::<Option<Secret>>()?.unwrap_or_default(),
                        limits: args.take::<Option<Vec<i64>>>()?.unwrap_or_default(),
                    })
                },
            ))
            .build()
    }
}

fn describe_plan_summary() -> TypeDescriptor {
    TypeDescriptor::builder::<Plan>("PlanSummary")
        .marked()
        .getter(Getter::new("get_name", |p: &Plan| p.name.clone()).property())
        .build()
}

/// A narrower declared shape of [`Plan`].
pub fn plan_summary_view() -> ObjectType {
    ObjectType::view::<Plan>("PlanSummary", describe_plan_summary)
}

/// Setter-populated, written through fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub enabled: bool,
    pub note: Option<String>,
    pub retries: i32,
}

impl Mappable for Settings {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Settings>("Settings")
            .marked()
            .field(Field::new("enabled", |s: &Settings| s.enabled, |s: &mut Settings, v| s.enabled = v))
            .field(Field::new("note", |s: &Settings| s.note.clone(), |s: &mut Settings, v| s.note = v))
            .field(Field::new("retries", |s: &Settings| s.retries, |s: &mut Settings, v| s.retries = v))
            .setter(Setter::new("set_enabled", |s: &mut Settings, v: bool| s.enabled = v))
            .setter(Setter::new("set_note", |s: &mut Settings, v: Option<String>| s.note = v))
            .setter(Setter::new("set_retries", |s: &mut Settings, v: i32| s.retries = v))
            .default_constructor(Settings::default)
            .build()
    }
}

/// Field-populated only; its theme defaults to something other than `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefs {
    pub theme: Option<String>,
    pub size: i32,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            theme: Some("dark".into()),
            size: 12,
        }
    }
}

impl Mappable for Prefs {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Prefs>("Prefs")
            .marked()
            .field(Field::new("theme", |p: &Prefs| p.theme.clone(), |p: &mut Prefs, v| p.theme = v))
            .field(Field::new("size", |p: &Prefs| p.size, |p: &mut Prefs, v| p.size = v))
            .default_constructor(Prefs::default)
            .build()
    }
}

/// Like [`Settings`], but its note setter rejects null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Strict {
    pub enabled: bool,
    pub note: Option<String>,
    pub retries: i32,
}

impl Mappable for Strict {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Strict>("Strict")
            .marked()
            .field(Field::new("enabled", |s: &Strict| s.enabled, |s: &mut Strict, v| s.enabled = v))
            .field(Field::new("note", |s: &Strict| s.note.clone(), |s: &mut Strict, v| s.note = v))
            .field(Field::new("retries", |s: &Strict| s.retries, |s: &mut Strict, v| s.retries = v))
            .setter(Setter::new("set_enabled", |s: &mut Strict, v: bool| s.enabled = v))
            .setter(Setter::try_new("set_note", |s: &mut Strict, v: Option<String>| {
                let note = v.ok_or("note is required")?;
                s.note = Some(note);
                Ok(())
            }))
            .setter(Setter::new("set_retries", |s: &mut Strict, v: i32| s.retries = v))
            .default_constructor(Strict::default)
            .build()
    }
}

#[derive(Debug, Default)]
pub struct Unmarked {
    pub id: i32,
}

impl Mappable for Unmarked {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Unmarked>("Unmarked")
            .field(Field::new("id", |u: &Unmarked| u.id, |u: &mut Unmarked, v| u.id = v))
            .default_constructor(Unmarked::default)
            .build()
    }
}

/// Two constructors cover its only field.
#[derive(Debug, Default)]
pub struct Ambiguous {
    pub id: i64,
}

impl Mappable for Ambiguous {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Ambiguous>("Ambiguous")
            .marked()
            .field(Field::new("id", |a: &Ambiguous| a.id, |a: &mut Ambiguous, v| a.id = v))
            .setter(Setter::new("set_id", |a: &mut Ambiguous, v: i64| a.id = v))
            .constructor(Constructor::new([Param::of::<i64>().alias("id")], |args| {
                Ok(Ambiguous { id: args.take()? })
            }))
            .constructor(Constructor::new(
                [Param::of::<i64>().alias("id"), Param::of::<String>().alias("label")],
                |args| Ok(Ambiguous { id: args.take()? }),
            ))
            .default_constructor(Ambiguous::default)
            .build()
    }
}

/// Its constructor parameter has no alias.
#[derive(Debug, Default)]
pub struct Unaliased {
    pub id: i64,
}

impl Mappable for Unaliased {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Unaliased>("Unaliased")
            .marked()
            .field(Field::new("id", |u: &Unaliased| u.id, |u: &mut Unaliased, v| u.id = v))
            .constructor(Constructor::new([Param::of::<i64>()], |args| {
                Ok(Unaliased { id: args.take()? })
            }))
            .build()
    }
}

/// Only reachable through its private zero-argument constructor.
#[derive(Debug, Default)]
pub struct Vault {
    pub code: String,
}

impl Mappable for Vault {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Vault>("Vault")
            .marked()
            .field(Field::new("code", |v: &Vault| v.code.clone(), |v: &mut Vault, c| v.code = c))
            .private_default_constructor(Vault::default)
            .build()
    }
}

pub struct LinkNode {
    name: String,
    next: Option<Link>,
}

/// Shared, possibly cyclic node.
#[derive(Clone)]
pub struct Link(Rc<RefCell<LinkNode>>);

impl Link {
    pub fn new(name: &str) -> Self {
        Link(Rc::new(RefCell::new(LinkNode {
            name: name.to_string(),
            next: None,
        })))
    }

    pub fn point_to(&self, next: &Link) {
        self.0.borrow_mut().next = Some(next.clone());
    }

    /// Break the cycle so both nodes are dropped.
    pub fn unlink(&self) {
        self.0.borrow_mut().next = None;
    }
}

impl Mappable for Link {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Link>("Link")
            .marked()
            .getter(Getter::new("get_name", |l: &Link| l.0.borrow().name.clone()).property())
            .getter(Getter::new("get_next", |l: &Link| l.0.borrow().next.clone()).property())
            .build()
    }
}
