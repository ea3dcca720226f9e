//! Typisierte Entity-Properties (Key → Variante).

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Vergleichsoperator eines `prop:`-Filterbefehls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `=`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl Comparator {
    /// Parst das Operator-Zeichen (`=`, `<`, `>`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Equal),
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            _ => None,
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::Less => ordering == Ordering::Less,
            Self::Greater => ordering == Ordering::Greater,
        }
    }
}

/// Wert einer Entity-Property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Ganzzahl (IDs, Flags, Zähler)
    Int(i64),
    /// Gleitkommazahl
    Float(f64),
    /// Wahrheitswert
    Bool(bool),
    /// Freitext (z.B. `ModelName`)
    Text(String),
    /// 3D-Vektor (Position, Rotation in Grad, Skalierung)
    Vec3(Vec3),
    /// Verweis auf eine andere Entity desselben Containers (per Name)
    Ref(String),
    /// Array-Property (per Index adressierbar)
    Array(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Liefert das Array-Element an `index`, falls die Property ein Array ist.
    pub fn element(&self, index: usize) -> Option<&PropertyValue> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Liefert den Text, falls die Property ein `Text` ist.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Liefert den Vektor, falls die Property ein `Vec3` ist.
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Vergleicht den Wert mit einem Filter-Literal.
    ///
    /// Numerische Werte werden numerisch verglichen, Text lexikographisch,
    /// Bool nur auf Gleichheit. Nicht interpretierbare Literale ergeben `false`.
    pub fn compare(&self, comparator: Comparator, literal: &str) -> bool {
        let literal = literal.trim();
        match self {
            Self::Int(value) => {
                if let Ok(target) = literal.parse::<i64>() {
                    comparator.accepts(value.cmp(&target))
                } else {
                    compare_float(*value as f64, comparator, literal)
                }
            }
            Self::Float(value) => compare_float(*value, comparator, literal),
            Self::Bool(value) => {
                if comparator != Comparator::Equal {
                    return false;
                }
                match literal.to_ascii_lowercase().as_str() {
                    "true" => *value,
                    "false" => !*value,
                    _ => false,
                }
            }
            Self::Text(value) | Self::Ref(value) => {
                comparator.accepts(value.as_str().cmp(literal))
            }
            Self::Vec3(_) | Self::Array(_) => false,
        }
    }
}

fn compare_float(value: f64, comparator: Comparator, literal: &str) -> bool {
    let Ok(target) = literal.parse::<f64>() else {
        return false;
    };
    value
        .partial_cmp(&target)
        .is_some_and(|ordering| comparator.accepts(ordering))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_compares_numerically() {
        let value = PropertyValue::Int(1001);
        assert!(value.compare(Comparator::Greater, "1000"));
        assert!(!value.compare(Comparator::Less, "1000"));
        assert!(value.compare(Comparator::Equal, " 1001 "));
    }

    #[test]
    fn int_accepts_float_literal() {
        let value = PropertyValue::Int(3);
        assert!(value.compare(Comparator::Less, "3.5"));
    }

    #[test]
    fn float_rejects_non_numeric_literal() {
        let value = PropertyValue::Float(2.5);
        assert!(!value.compare(Comparator::Equal, "abc"));
    }

    #[test]
    fn bool_supports_equality_only() {
        let value = PropertyValue::Bool(true);
        assert!(value.compare(Comparator::Equal, "TRUE"));
        assert!(!value.compare(Comparator::Equal, "false"));
        assert!(!value.compare(Comparator::Greater, "false"));
    }

    #[test]
    fn text_equality_is_case_sensitive() {
        let value = PropertyValue::Text("c1000".to_string());
        assert!(value.compare(Comparator::Equal, "c1000"));
        assert!(!value.compare(Comparator::Equal, "C1000"));
        assert!(value.compare(Comparator::Less, "c2000"));
    }

    #[test]
    fn vector_and_array_never_match_directly() {
        assert!(!PropertyValue::Vec3(Vec3::ZERO).compare(Comparator::Equal, "0"));
        assert!(!PropertyValue::Array(vec![PropertyValue::Int(0)]).compare(Comparator::Equal, "0"));
    }

    #[test]
    fn element_reads_array_slot() {
        let value = PropertyValue::Array(vec![PropertyValue::Int(5), PropertyValue::Int(999)]);
        assert_eq!(value.element(1), Some(&PropertyValue::Int(999)));
        assert_eq!(value.element(2), None);
        assert_eq!(PropertyValue::Int(1).element(0), None);
    }
}
