use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Purchase intention level shown in the dashboard distribution widget.
/// `H` is the hottest lead, `D` the coldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intention {
    H,
    A,
    B,
    C,
    D,
}

impl Default for Intention {
    fn default() -> Self {
        Self::C
    }
}

impl Intention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl FromStr for Intention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Self::H),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(format!("Invalid intention level: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: ID,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub intention: Intention,
    /// Only the month and day are meaningful for scheduling. The stored
    /// year is the birth year and is never used when computing the next
    /// occurrence.
    pub birthday: Option<NaiveDate>,
    /// The single explicit next-visit plan on the customer record. Not the
    /// same store as the visit log.
    pub planned_visit_date: Option<NaiveDate>,
    pub planned_visit_content: Option<String>,
    pub created_at: NaiveDate,
}

impl Customer {
    pub fn new(name: &str, created_at: NaiveDate) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            phone: None,
            email: None,
            company: None,
            intention: Default::default(),
            birthday: None,
            planned_visit_date: None,
            planned_visit_content: None,
            created_at,
        }
    }
}

impl Entity<ID> for Customer {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Customer count per intention level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentionDistribution {
    pub h: i64,
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl IntentionDistribution {
    pub fn from_customers(customers: &[Customer]) -> Self {
        let mut distribution = Self::default();
        for customer in customers {
            match customer.intention {
                Intention::H => distribution.h += 1,
                Intention::A => distribution.a += 1,
                Intention::B => distribution.b += 1,
                Intention::C => distribution.c += 1,
                Intention::D => distribution.d += 1,
            }
        }
        distribution
    }
}
