use leadgen::error::AppError;
use leadgen::workflows::leads::{
    FormInput, FormSubmission, PriceLevelFilter, StatusFilter, WebsiteFilter,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub(crate) fn parse_website_filter(raw: &str) -> Result<WebsiteFilter, String> {
    raw.parse().map_err(|err| format!("{err} (expected any, has_website or no_website)"))
}

pub(crate) fn parse_status_filter(raw: &str) -> Result<StatusFilter, String> {
    raw.parse().map_err(|err| {
        format!("{err} (expected any, OPERATIONAL, CLOSED_TEMPORARILY or CLOSED_PERMANENTLY)")
    })
}

pub(crate) fn parse_price_level_filter(raw: &str) -> Result<PriceLevelFilter, String> {
    raw.parse().map_err(|err| format!("{err} (expected any or 1-4)"))
}

/// Reads a JSON form payload from disk and converts it into form state.
pub(crate) fn load_form_submission(path: &Path) -> Result<FormInput, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let submission: FormSubmission =
        serde_json::from_reader(reader).map_err(std::io::Error::from)?;
    Ok(FormInput::try_from(submission)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn value_parsers_explain_accepted_values() {
        let err = parse_website_filter("sometimes").expect_err("rejected");
        assert!(err.contains("has_website"));
        assert_eq!(parse_price_level_filter("2").map(|_| ()), Ok(()));
        assert!(parse_status_filter("OPEN").is_err());
    }

    #[test]
    fn form_file_round_trips_into_form_input() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"businessType": "hvac", "locations": "Denver, CO\nBoulder, CO", "maxResults": 3}}"#
        )
        .expect("write payload");

        let form = load_form_submission(file.path()).expect("form loads");
        assert_eq!(form.locations, vec!["Denver, CO", "Boulder, CO"]);
        assert_eq!(form.max_results, 3);
    }

    #[test]
    fn malformed_form_file_is_an_io_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{not json").expect("write payload");

        let err = load_form_submission(file.path()).expect_err("malformed payload");
        assert!(matches!(err, AppError::Io(_)));
    }
}
