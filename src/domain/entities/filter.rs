use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The three independent facets a census page can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Age,
    Education,
    Country,
}

impl Facet {
    pub fn query_key(self) -> &'static str {
        match self {
            Facet::Age => "age",
            Facet::Education => "education",
            Facet::Country => "country",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facet::Age => "Select Age",
            Facet::Education => "Select Education",
            Facet::Country => "Select Native Country",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {facet} filter value: {value:?}")]
pub struct UnknownFilterValue {
    pub facet: Facet,
    pub value: String,
}

/// A closed set of selectable values for one facet.
pub trait FilterValue: Copy + Sized + 'static {
    const FACET: Facet;

    fn all() -> &'static [Self];
    fn token(self) -> &'static str;
    fn label(self) -> &'static str;
}

fn parse_filter<T: FilterValue>(value: &str) -> Result<T, UnknownFilterValue> {
    T::all()
        .iter()
        .copied()
        .find(|candidate| candidate.token() == value)
        .ok_or_else(|| UnknownFilterValue {
            facet: T::FACET,
            value: value.to_string(),
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AgeFilter {
    #[default]
    Any,
    Over50,
    Less50,
    Less30,
}

impl FilterValue for AgeFilter {
    const FACET: Facet = Facet::Age;

    fn all() -> &'static [Self] {
        &[
            AgeFilter::Any,
            AgeFilter::Over50,
            AgeFilter::Less50,
            AgeFilter::Less30,
        ]
    }

    fn token(self) -> &'static str {
        match self {
            AgeFilter::Any => "any",
            AgeFilter::Over50 => "over50",
            AgeFilter::Less50 => "less50",
            AgeFilter::Less30 => "less30",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeFilter::Any => "Any",
            AgeFilter::Over50 => "Older than 50 years old",
            AgeFilter::Less50 => "Less than 50 years old",
            AgeFilter::Less30 => "Less than 30 years old",
        }
    }
}

impl FromStr for AgeFilter {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_filter(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EducationFilter {
    #[default]
    Any,
    Bachelor,
    Master,
    College,
    Grad,
}

impl FilterValue for EducationFilter {
    const FACET: Facet = Facet::Education;

    fn all() -> &'static [Self] {
        &[
            EducationFilter::Any,
            EducationFilter::Bachelor,
            EducationFilter::Master,
            EducationFilter::College,
            EducationFilter::Grad,
        ]
    }

    fn token(self) -> &'static str {
        match self {
            EducationFilter::Any => "any",
            EducationFilter::Bachelor => "bachelor",
            EducationFilter::Master => "master",
            EducationFilter::College => "college",
            EducationFilter::Grad => "grad",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EducationFilter::Any => "Any",
            EducationFilter::Bachelor => "Bachelors",
            EducationFilter::Master => "Masters",
            EducationFilter::College => "Some-college",
            EducationFilter::Grad => "HS-grad",
        }
    }
}

impl FromStr for EducationFilter {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_filter(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CountryFilter {
    #[default]
    Any,
    Us,
    Can,
    Mex,
}

impl FilterValue for CountryFilter {
    const FACET: Facet = Facet::Country;

    fn all() -> &'static [Self] {
        &[
            CountryFilter::Any,
            CountryFilter::Us,
            CountryFilter::Can,
            CountryFilter::Mex,
        ]
    }

    fn token(self) -> &'static str {
        match self {
            CountryFilter::Any => "any",
            CountryFilter::Us => "us",
            CountryFilter::Can => "can",
            CountryFilter::Mex => "mex",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CountryFilter::Any => "Any",
            CountryFilter::Us => "US",
            CountryFilter::Can => "Canada",
            CountryFilter::Mex => "Mexico",
        }
    }
}

impl FromStr for CountryFilter {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_filter(value)
    }
}

/// Snapshot of the three filter selections. Replaced wholesale on change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub age: AgeFilter,
    pub education: EducationFilter,
    pub country: CountryFilter,
}

impl FilterSelection {
    pub fn with_age(self, age: AgeFilter) -> Self {
        Self { age, ..self }
    }

    pub fn with_education(self, education: EducationFilter) -> Self {
        Self { education, ..self }
    }

    pub fn with_country(self, country: CountryFilter) -> Self {
        Self { country, ..self }
    }
}
