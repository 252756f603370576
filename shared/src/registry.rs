use crate::forms::{FilingStatus, FormStatuses};

/// City-level filing obligation nested under a state's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityReturns {
    /// Every city in the state files its own return.
    All,
    /// Only the named cities file, in display order.
    Specific(&'static [&'static str]),
}

/// One jurisdiction of the filing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub forms: FormStatuses,
    pub city_returns: Option<CityReturns>,
}

const R: FilingStatus = FilingStatus::Required;
const C: FilingStatus = FilingStatus::Conditional;
const N: FilingStatus = FilingStatus::NotRequired;

const fn forms(
    s_corp: FilingStatus,
    partnership: FilingStatus,
    c_corp: FilingStatus,
    individual: FilingStatus,
) -> FormStatuses {
    FormStatuses {
        s_corp,
        partnership,
        c_corp,
        individual,
    }
}

const fn region(
    code: &'static str,
    name: &'static str,
    forms: FormStatuses,
    city_returns: Option<CityReturns>,
) -> Region {
    Region {
        code,
        name,
        forms,
        city_returns,
    }
}

/// The 50 states plus the District of Columbia, in table order.
pub static REGIONS: &[Region] = &[
    region("AL", "Alabama", forms(R, R, R, R), None),
    region("AK", "Alaska", forms(N, N, R, N), None),
    region("AZ", "Arizona", forms(R, R, R, R), None),
    region("AR", "Arkansas", forms(R, R, R, R), None),
    region("CA", "California", forms(R, R, R, R), None),
    region("CO", "Colorado", forms(R, R, R, R), None),
    region("CT", "Connecticut", forms(R, R, R, R), None),
    region("DE", "Delaware", forms(R, R, R, R), None),
    region("DC", "District of Columbia", forms(R, R, R, R), None),
    region("FL", "Florida", forms(N, N, R, N), None),
    region("GA", "Georgia", forms(R, R, R, R), None),
    region("HI", "Hawaii", forms(R, R, R, R), None),
    region("ID", "Idaho", forms(R, R, R, R), None),
    region("IL", "Illinois", forms(R, R, R, R), None),
    region("IN", "Indiana", forms(R, R, R, R), None),
    region("IA", "Iowa", forms(R, R, R, R), None),
    region("KS", "Kansas", forms(N, N, R, R), None),
    region("KY", "Kentucky", forms(R, R, R, R), Some(CityReturns::Specific(&["Lexington", "Louisville"]))),
    region("LA", "Louisiana", forms(C, C, R, C), None),
    region("ME", "Maine", forms(C, C, R, C), None),
    region("MD", "Maryland", forms(R, R, R, R), Some(CityReturns::All)),
    region("MA", "Massachusetts", forms(R, R, R, R), None),
    region("MI", "Michigan", forms(N, N, R, R), Some(CityReturns::All)),
    region("MN", "Minnesota", forms(R, R, R, R), None),
    region("MS", "Mississippi", forms(R, R, R, R), None),
    region("MO", "Missouri", forms(R, R, R, R), Some(CityReturns::Specific(&["Kansas City"]))),
    region("MT", "Montana", forms(R, R, R, R), None),
    region("NE", "Nebraska", forms(R, R, R, R), None),
    region("NV", "Nevada", forms(N, N, R, N), None),
    region("NH", "New Hampshire", forms(C, C, R, C), None),
    region("NJ", "New Jersey", forms(R, R, R, R), None),
    region("NM", "New Mexico", forms(R, R, R, R), None),
    region("NY", "New York", forms(R, R, R, R), Some(CityReturns::Specific(&["New York City", "Yonkers"]))),
    region("NC", "North Carolina", forms(R, R, R, R), None),
    region("ND", "North Dakota", forms(R, R, R, R), None),
    region("OH", "Ohio", forms(C, C, R, C), Some(CityReturns::All)),
    region("OK", "Oklahoma", forms(R, R, R, R), None),
    region("OR", "Oregon", forms(R, R, R, R), Some(CityReturns::Specific(&["Portland"]))),
    region("PA", "Pennsylvania", forms(R, R, R, R), Some(CityReturns::Specific(&["Philadelphia"]))),
    region("RI", "Rhode Island", forms(R, R, R, R), None),
    region("SC", "South Carolina", forms(R, R, R, R), None),
    region("SD", "South Dakota", forms(N, N, R, N), None),
    region("TN", "Tennessee", forms(R, R, R, N), None),
    region("TX", "Texas", forms(R, R, R, N), None),
    region("UT", "Utah", forms(C, C, R, C), None),
    region("VT", "Vermont", forms(R, R, R, R), None),
    region("VA", "Virginia", forms(R, R, R, R), None),
    region("WA", "Washington", forms(N, N, R, N), None),
    region("WV", "West Virginia", forms(R, R, R, R), None),
    region("WI", "Wisconsin", forms(R, R, R, R), None),
    region("WY", "Wyoming", forms(N, N, R, N), None),
];

const GENERIC_CONDITIONAL_CRITERIA: &str = "See detailed notes for specific criteria";

pub fn lookup(code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.code == code)
}

/// Every registry code in table order.
pub fn all_codes() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|region| region.code)
}

/// Criteria text shown next to a state's conditional statuses.
pub fn conditional_criteria(code: &str) -> &'static str {
    match code {
        "LA" | "ME" | "OH" => "If partners are non-residents",
        "NH" => "Over $50k income",
        "UT" => "If partners are corporate or non-residents",
        _ => GENERIC_CONDITIONAL_CRITERIA,
    }
}

/// Resolve free text to a region by abbreviation or full name, ignoring case.
pub fn resolve(input: &str) -> Option<&'static Region> {
    let needle = input.trim();
    if needle.is_empty() {
        return None;
    }
    REGIONS.iter().find(|region| {
        region.code.eq_ignore_ascii_case(needle) || region.name.eq_ignore_ascii_case(needle)
    })
}
