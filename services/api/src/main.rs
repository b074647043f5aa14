use vendor_assess_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("vendor-assess error: {err}");
        std::process::exit(1);
    }
}
