use leadgen_cli::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        if err.is_user_facing() {
            eprintln!("{err}");
        } else {
            eprintln!("application error: {err}");
        }
        std::process::exit(1);
    }
}
