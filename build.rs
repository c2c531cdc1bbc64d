use std::env;

fn main() {
    dotenvy::dotenv().ok();

    let required_vars = ["DATABASE_URL"];

    for &var in &required_vars {
        println!("cargo:rerun-if-env-changed={}", var);
        if env::var(var).is_err() {
            println!("cargo:warning=Required environment variable {} is not set.", var);
        }
    }
}
