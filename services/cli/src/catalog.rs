use leadgen::workflows::leads::{business_type_catalog, names_for};

pub(crate) fn run_business_types() {
    println!("{}", render_business_types());
}

fn render_business_types() -> String {
    let mut lines = vec!["Business types".to_string()];
    for (key, names) in business_type_catalog() {
        lines.push(format!("- {key}: {}", names.join(", ")));
    }
    lines.push(format!(
        "- any other type (use --business-type custom --custom-type <TEXT>): {}",
        names_for("").join(", ")
    ));
    lines.join("\n")
}
