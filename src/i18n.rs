//! English/Portuguese text layer.
//!
//! Both tables are embedded at compile time from `locales/*.json`. Nested
//! objects are flattened into dotted keys, so `{"services": {"custom_ml": ..}}`
//! is looked up as `"services.custom_ml"`. Lookups try the active locale,
//! then English, then give back the key itself.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use yew::prelude::*;

const EN_TABLE: &str = include_str!("../locales/en.json");
const PT_TABLE: &str = include_str!("../locales/pt.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// Switcher order.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Pt]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
pub enum LocaleError {
    Parse(Locale, serde_json::Error),
    NotAnObject(Locale),
    InvalidValue { locale: Locale, key: String },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Parse(locale, e) => write!(f, "{} table is not valid JSON: {}", locale, e),
            LocaleError::NotAnObject(locale) => write!(f, "{} table must be a JSON object", locale),
            LocaleError::InvalidValue { locale, key } => {
                write!(f, "{} table has a non-string value at '{}'", locale, key)
            }
        }
    }
}

impl std::error::Error for LocaleError {}

/// Flat key -> string table for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(locale: Locale, source: &str) -> Result<Self, LocaleError> {
        let root: Value =
            serde_json::from_str(source).map_err(|e| LocaleError::Parse(locale, e))?;
        let Value::Object(map) = root else {
            return Err(LocaleError::NotAnObject(locale));
        };

        let mut entries = HashMap::new();
        for (key, value) in map {
            flatten(locale, key, value, &mut entries)?;
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl Catalog {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(
    locale: Locale,
    key: String,
    value: Value,
    out: &mut HashMap<String, String>,
) -> Result<(), LocaleError> {
    match value {
        Value::String(text) => {
            out.insert(key, text);
            Ok(())
        }
        Value::Object(map) => {
            for (child, value) in map {
                flatten(locale, format!("{}.{}", key, child), value, out)?;
            }
            Ok(())
        }
        _ => Err(LocaleError::InvalidValue { locale, key }),
    }
}

/// Both tables plus the active locale. Tables are shared, so switching
/// locale only copies two pointers.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    active: Locale,
    en: Rc<Catalog>,
    pt: Rc<Catalog>,
}

impl LocaleStore {
    pub fn new(en: Catalog, pt: Catalog) -> Self {
        Self {
            active: Locale::default(),
            en: Rc::new(en),
            pt: Rc::new(pt),
        }
    }

    /// Tables shipped inside the binary.
    pub fn bundled() -> Result<Self, LocaleError> {
        Ok(Self::new(
            Catalog::from_json(Locale::En, EN_TABLE)?,
            Catalog::from_json(Locale::Pt, PT_TABLE)?,
        ))
    }

    /// Store with no strings at all; every lookup returns its key.
    pub fn empty() -> Self {
        Self::new(Catalog::default(), Catalog::default())
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    pub fn set_active(&mut self, locale: Locale) {
        self.active = locale;
    }

    pub fn catalog(&self, locale: Locale) -> &Catalog {
        match locale {
            Locale::En => &self.en,
            Locale::Pt => &self.pt,
        }
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog(self.active)
            .get(key)
            .or_else(|| self.catalog(Locale::FALLBACK).get(key))
            .unwrap_or(key)
    }
}

impl PartialEq for LocaleStore {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active && Rc::ptr_eq(&self.en, &other.en) && Rc::ptr_eq(&self.pt, &other.pt)
    }
}

pub enum LocaleAction {
    Switch(Locale),
}

impl Reducible for LocaleStore {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LocaleAction::Switch(locale) if locale == self.active => self,
            LocaleAction::Switch(locale) => {
                let mut next = (*self).clone();
                next.set_active(locale);
                Rc::new(next)
            }
        }
    }
}

pub type LocaleHandle = UseReducerHandle<LocaleStore>;
