use super::domain::{
    BusinessRecord, BusinessStatus, PriceLevel, PriceLevelFilter, SearchCriteria, StatusFilter,
    SAMPLE_SOURCE,
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform samples in `[0, 1)` used to fabricate records.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

static FALLBACK_NAMES: [&str; 4] = [
    "Professional Services",
    "Elite Business",
    "Master Services",
    "Premium Solutions",
];

static NAME_CATALOG: [(&str, [&str; 4]); 5] = [
    (
        "plumber",
        [
            "Plumbing Pro",
            "Elite Plumbing",
            "Master Plumbers",
            "Premium Plumbing Services",
        ],
    ),
    (
        "electrician",
        [
            "Power Electric",
            "Elite Electrical",
            "Master Electricians",
            "Premium Electrical",
        ],
    ),
    (
        "hvac",
        [
            "Climate Control Pro",
            "Elite HVAC",
            "Master HVAC",
            "Premium Air Systems",
        ],
    ),
    (
        "lawyer",
        [
            "Law Partners",
            "Elite Legal",
            "Master Attorneys",
            "Premium Law Group",
        ],
    ),
    (
        "accountant",
        [
            "Financial Partners",
            "Elite Accounting",
            "Master CPAs",
            "Premium Tax Services",
        ],
    ),
];

/// Business types with a dedicated name set, paired with those names.
pub fn business_type_catalog() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    NAME_CATALOG
        .iter()
        .map(|(key, names)| (*key, names.as_slice()))
}

/// Base names used for a business type; unknown types share a generic set.
pub fn names_for(business_type: &str) -> &'static [&'static str] {
    NAME_CATALOG
        .iter()
        .find(|(key, _)| *key == business_type)
        .map(|(_, names)| names.as_slice())
        .unwrap_or(FALLBACK_NAMES.as_slice())
}

/// Fabricates `criteria.batch_size()` candidates and keeps the ones passing every filter.
///
/// Records that fail a filter are dropped without replacement, so the result
/// may be shorter than the batch or empty.
pub fn generate_sample_businesses<R>(criteria: &SearchCriteria, rng: &mut R) -> Vec<BusinessRecord>
where
    R: RandomSource + ?Sized,
{
    if criteria.locations.is_empty() {
        return Vec::new();
    }

    let names = names_for(&criteria.business_type);
    let batch = criteria.batch_size();
    let mut kept = Vec::with_capacity(batch);

    for index in 0..batch {
        let base_name = names[index % names.len()];
        let location = &criteria.locations[index % criteria.locations.len()];
        let record = fabricate_record(base_name, location, criteria, rng);

        if passes_filters(&record, criteria) {
            kept.push(record);
        } else {
            tracing::trace!(name = %record.name, "sample record filtered out");
        }
    }

    tracing::debug!(
        business_type = %criteria.business_type,
        fabricated = batch,
        kept = kept.len(),
        "sample businesses generated"
    );

    kept
}

/// Draw order: street, phone (three parts), website, rating, reviews, then price level when unconstrained.
fn fabricate_record<R>(
    base_name: &str,
    location: &str,
    criteria: &SearchCriteria,
    rng: &mut R,
) -> BusinessRecord
where
    R: RandomSource + ?Sized,
{
    let city = location.split(',').next().unwrap_or(location);

    let street = uniform_int(rng, 9999) + 1;
    let area = uniform_int(rng, 900) + 100;
    let exchange = uniform_int(rng, 900) + 100;
    let line = uniform_int(rng, 9000) + 1000;
    let website = (rng.next_unit() > 0.2).then(|| website_for(base_name));
    let rating = round_to_tenth(rng.next_unit() * 2.0 + 3.0);
    let reviews = uniform_int(rng, 50) + 10;

    let price_level = match criteria.price_level {
        PriceLevelFilter::Exactly(level) => level,
        PriceLevelFilter::Any => {
            let drawn = uniform_int(rng, 3) + 2;
            PriceLevel::new(drawn as u8).unwrap_or(PriceLevel::MODERATE)
        }
    };

    let status = match criteria.business_status {
        StatusFilter::Any => BusinessStatus::Operational,
        StatusFilter::Only(status) => status,
    };

    BusinessRecord {
        name: format!("{base_name} - {city}"),
        address: format!("{street} Main St, {location}"),
        phone: Some(format!("({area})-{exchange}-{line}")),
        website,
        rating,
        reviews,
        price_level,
        status,
        source: SAMPLE_SOURCE.to_string(),
    }
}

pub fn passes_filters(record: &BusinessRecord, criteria: &SearchCriteria) -> bool {
    record.rating >= criteria.min_rating
        && record.reviews >= criteria.min_reviews
        && criteria.has_website.matches(record.website.as_deref())
        && criteria.business_status.matches(record.status)
        && criteria.price_level.matches(record.price_level)
}

fn website_for(base_name: &str) -> String {
    let slug: String = base_name
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("https://www.{slug}.com")
}

fn uniform_int<R>(rng: &mut R, span: u32) -> u32
where
    R: RandomSource + ?Sized,
{
    let unit = rng.next_unit().clamp(0.0, 1.0);
    ((unit * f64::from(span)).floor() as u32).min(span.saturating_sub(1))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::leads::domain::WebsiteFilter;
    use std::collections::VecDeque;

    struct ScriptedSource {
        values: VecDeque<f64>,
    }

    impl ScriptedSource {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            self.values.pop_front().unwrap_or(0.5)
        }
    }

    fn criteria(business_type: &str, locations: &[&str]) -> SearchCriteria {
        SearchCriteria {
            business_type: business_type.to_string(),
            locations: locations.iter().map(|loc| loc.to_string()).collect(),
            min_rating: 0.0,
            min_reviews: 0,
            has_website: WebsiteFilter::Any,
            business_status: StatusFilter::Any,
            price_level: PriceLevelFilter::Any,
            max_results: 1,
            search_radius_miles: 10,
        }
    }

    #[test]
    fn scripted_source_produces_exact_record() {
        let criteria = criteria("plumber", &["Austin, TX"]);
        let mut rng = ScriptedSource::new(&[0.0, 0.5, 0.25, 0.9995, 0.9, 0.76, 0.8, 0.99]);

        let records = generate_sample_businesses(&criteria, &mut rng);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.name, "Plumbing Pro - Austin");
        assert_eq!(record.address, "1 Main St, Austin, TX");
        assert_eq!(record.phone.as_deref(), Some("(550)-325-9995"));
        assert_eq!(record.website.as_deref(), Some("https://www.plumbingpro.com"));
        assert_eq!(record.rating, 4.5);
        assert_eq!(record.reviews, 50);
        assert_eq!(record.price_level.get(), 4);
        assert_eq!(record.status, BusinessStatus::Operational);
        assert_eq!(record.source, SAMPLE_SOURCE);
    }

    #[test]
    fn website_requires_draw_above_threshold() {
        let criteria = criteria("hvac", &["Denver, CO"]);
        let mut rng = ScriptedSource::new(&[0.1, 0.1, 0.1, 0.1, 0.2, 0.5, 0.5, 0.5]);

        let records = generate_sample_businesses(&criteria, &mut rng);
        assert!(records[0].website.is_none());
    }

    #[test]
    fn requested_price_and_status_skip_random_draws() {
        let mut criteria = criteria("electrician", &["Reno, NV"]);
        criteria.max_results = 2;
        criteria.price_level = "1".parse().expect("valid level");
        criteria.business_status = StatusFilter::Only(BusinessStatus::ClosedTemporarily);
        let mut rng = ScriptedSource::new(&[
            0.0, 0.0, 0.0, 0.0, 0.9, 0.0, 0.0, // first record: seven draws
            0.5, 0.0, 0.0, 0.0, 0.9, 1.0 - f64::EPSILON, 0.99, // second record
        ]);

        let records = generate_sample_businesses(&criteria, &mut rng);
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|record| record.price_level.get() == 1
                && record.status == BusinessStatus::ClosedTemporarily));
        assert_eq!(records[1].name, "Elite Electrical - Reno");
        assert_eq!(records[1].address, "5000 Main St, Reno, NV");
        assert_eq!(records[1].rating, 5.0);
        assert_eq!(records[1].reviews, 59);
    }

    #[test]
    fn names_and_locations_cycle_independently() {
        let mut criteria = criteria("lawyer", &["Buffalo, NY", "Rochester, NY", "Syracuse"]);
        criteria.max_results = 6;
        let mut rng = RngSource::seeded(7);

        let names: Vec<_> = generate_sample_businesses(&criteria, &mut rng)
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Law Partners - Buffalo",
                "Elite Legal - Rochester",
                "Master Attorneys - Syracuse",
                "Premium Law Group - Buffalo",
                "Law Partners - Rochester",
                "Elite Legal - Syracuse",
            ]
        );
    }

    #[test]
    fn unknown_type_uses_generic_names() {
        assert_eq!(names_for("florist"), FALLBACK_NAMES.as_slice());
        assert_eq!(names_for("plumber")[1], "Elite Plumbing");
    }

    #[test]
    fn filters_drop_records_without_backfill() {
        let mut criteria = criteria("plumber", &["Austin, TX"]);
        criteria.max_results = 2;
        criteria.min_rating = 4.0;
        // first record rates 3.0, second rates 4.6
        let mut rng = ScriptedSource::new(&[
            0.5, 0.5, 0.5, 0.5, 0.9, 0.0, 0.5, 0.5, //
            0.5, 0.5, 0.5, 0.5, 0.9, 0.8, 0.5, 0.5,
        ]);

        let records = generate_sample_businesses(&criteria, &mut rng);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Elite Plumbing - Austin");
        assert_eq!(records[0].rating, 4.6);
    }

    #[test]
    fn seeded_runs_respect_caps_and_filters() {
        for seed in 0..50 {
            let mut criteria = criteria("accountant", &["Tulsa, OK"]);
            criteria.max_results = 25;
            criteria.min_rating = 3.8;
            criteria.min_reviews = 30;
            criteria.has_website = WebsiteFilter::HasWebsite;
            let mut rng = RngSource::seeded(seed);

            let records = generate_sample_businesses(&criteria, &mut rng);
            assert!(records.len() <= 10);
            for record in records {
                assert!(record.rating >= 3.8 && record.rating <= 5.0);
                assert!((30..=59).contains(&record.reviews));
                assert!(record.website.is_some());
                assert!((2..=4).contains(&record.price_level.get()));
            }
        }
    }

    #[test]
    fn empty_locations_yield_nothing() {
        let criteria = criteria("plumber", &[]);
        let mut rng = RngSource::seeded(1);
        assert!(generate_sample_businesses(&criteria, &mut rng).is_empty());
    }
}
