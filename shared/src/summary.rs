use crate::forms::{FilingStatus, FormType};
use crate::registry::{self, CityReturns, Region};
use crate::selection::SelectionSet;

/// Number of "City, XX" entries shown before the list is cut short.
pub const CITY_PREVIEW_LIMIT: usize = 5;

/// Summary bucket a selected state falls into for the active form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Required,
    Conditional,
    NoFiling,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Required, Bucket::Conditional, Bucket::NoFiling];

    pub fn for_status(status: FilingStatus) -> Self {
        match status {
            FilingStatus::Required => Self::Required,
            FilingStatus::Conditional => Self::Conditional,
            FilingStatus::NotRequired => Self::NoFiling,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Required => "Filing Required",
            Self::Conditional => "Conditional Filing",
            Self::NoFiling => "No Filing Required",
        }
    }

    /// Title of the states modal opened from this bucket.
    pub fn modal_title(self) -> &'static str {
        match self {
            Self::Required => "Filing Required States",
            Self::Conditional => "Conditional Filing States",
            Self::NoFiling => "No Filing Required States",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Required => "filing-required-bucket",
            Self::Conditional => "conditional-bucket",
            Self::NoFiling => "no-filing-bucket",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketCounts {
    pub required: usize,
    pub conditional: usize,
    pub not_required: usize,
}

impl BucketCounts {
    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Required => self.required,
            Bucket::Conditional => self.conditional,
            Bucket::NoFiling => self.not_required,
        }
    }
}

fn selected_regions(selection: &SelectionSet) -> impl Iterator<Item = &'static Region> + '_ {
    selection.iter().filter_map(registry::lookup)
}

pub fn bucket_counts(selection: &SelectionSet, form: FormType) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for region in selected_regions(selection) {
        match Bucket::for_status(region.forms.get(form)) {
            Bucket::Required => counts.required += 1,
            Bucket::Conditional => counts.conditional += 1,
            Bucket::NoFiling => counts.not_required += 1,
        }
    }
    counts
}

/// Selected states in `bucket`, in selection order.
pub fn bucket_members(
    selection: &SelectionSet,
    form: FormType,
    bucket: Bucket,
) -> Vec<&'static Region> {
    selected_regions(selection)
        .filter(|region| Bucket::for_status(region.forms.get(form)) == bucket)
        .collect()
}

/// City-level filing obligations across the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityReturnsSummary {
    /// Selected states where every city files.
    pub all_cities_states: usize,
    /// Selected states where only named cities file.
    pub specific_states: usize,
    /// "City, XX" entries for the specific-city states.
    pub cities: Vec<String>,
}

impl CityReturnsSummary {
    pub fn is_empty(&self) -> bool {
        self.all_cities_states == 0 && self.specific_states == 0
    }

    /// First few cities, with a trailer when the list is longer.
    pub fn preview(&self) -> String {
        let shown = self.cities.len().min(CITY_PREVIEW_LIMIT);
        let mut out = self.cities[..shown].join(", ");
        if self.cities.len() > CITY_PREVIEW_LIMIT {
            out.push_str(" and more...");
        }
        out
    }
}

pub fn city_returns_summary(selection: &SelectionSet) -> CityReturnsSummary {
    let mut summary = CityReturnsSummary::default();
    for region in selected_regions(selection) {
        match region.city_returns {
            Some(CityReturns::All) => summary.all_cities_states += 1,
            Some(CityReturns::Specific(cities)) if !cities.is_empty() => {
                summary.specific_states += 1;
                summary
                    .cities
                    .extend(cities.iter().map(|city| format!("{city}, {}", region.code)));
            }
            _ => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(codes: &[&str]) -> SelectionSet {
        let mut set = SelectionSet::new();
        for code in codes {
            set.insert(code).unwrap();
        }
        set
    }

    #[test]
    fn counts_follow_active_form() {
        let set = selection(&["CA", "LA", "AK", "TX"]);
        assert_eq!(
            bucket_counts(&set, FormType::SCorp),
            BucketCounts {
                required: 2,
                conditional: 1,
                not_required: 1
            }
        );
        assert_eq!(
            bucket_counts(&set, FormType::CCorp),
            BucketCounts {
                required: 4,
                conditional: 0,
                not_required: 0
            }
        );
        assert_eq!(
            bucket_counts(&set, FormType::Individual),
            BucketCounts {
                required: 1,
                conditional: 1,
                not_required: 2
            }
        );
    }

    #[test]
    fn empty_selection_counts_nothing() {
        assert_eq!(
            bucket_counts(&SelectionSet::new(), FormType::SCorp),
            BucketCounts::default()
        );
    }

    #[test]
    fn members_keep_selection_order() {
        let set = selection(&["WY", "AK", "CA", "NV"]);
        let codes: Vec<_> = bucket_members(&set, FormType::SCorp, Bucket::NoFiling)
            .iter()
            .map(|region| region.code)
            .collect();
        assert_eq!(codes, vec!["WY", "AK", "NV"]);
        assert!(bucket_members(&set, FormType::SCorp, Bucket::Conditional).is_empty());
    }

    #[test]
    fn city_summary_lists_specific_cities() {
        let set = selection(&["MD", "NY", "KY", "CA", "OH"]);
        let summary = city_returns_summary(&set);
        assert_eq!(summary.all_cities_states, 2);
        assert_eq!(summary.specific_states, 2);
        assert_eq!(
            summary.cities,
            vec![
                "New York City, NY",
                "Yonkers, NY",
                "Lexington, KY",
                "Louisville, KY"
            ]
        );
        assert_eq!(
            summary.preview(),
            "New York City, NY, Yonkers, NY, Lexington, KY, Louisville, KY"
        );
    }

    #[test]
    fn city_preview_truncates_after_five() {
        let summary = city_returns_summary(&SelectionSet::all());
        assert_eq!(summary.cities.len(), 7);
        assert!(summary.preview().ends_with(" and more..."));
        assert_eq!(summary.preview().matches(", ").count(), 9);
    }

    #[test]
    fn no_city_obligations_is_empty() {
        assert!(city_returns_summary(&selection(&["CA", "TX"])).is_empty());
    }
}
