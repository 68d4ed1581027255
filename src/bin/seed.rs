// src/bin/seed.rs
// DOCUMENTATION: Seeds a running service with sample cafes
// PURPOSE: Health-check the API, then POST each cafe to /add

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::{Duration, Instant};

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// --- Data ---

/// Form body accepted by POST /add
#[derive(Serialize, Debug, Clone)]
struct CafeForm {
    name: &'static str,
    map_url: &'static str,
    img_url: &'static str,
    loc: &'static str,
    seats: &'static str,
    // Booleans travel as strings; empty means false on the server
    toilet: &'static str,
    wifi: &'static str,
    sockets: &'static str,
    calls: &'static str,
    coffee_price: &'static str,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    error: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug)]
struct SeedResult {
    name: &'static str,
    success: bool,
    detail: String,
    duration_secs: f64,
}

fn sample_cafes() -> Vec<CafeForm> {
    let yes = "1";
    let no = "";
    vec![
        CafeForm {
            name: "Science Gallery London",
            map_url: "https://g.page/scigallerylon",
            img_url: "https://atlondonbridge.com/wp-content/uploads/2019/02/Pano_9758_9761-Edit-190918_LTS_Science_Gallery-Medium-Crop-V2.jpg",
            loc: "London Bridge",
            seats: "50+",
            toilet: yes,
            wifi: no,
            sockets: yes,
            calls: yes,
            coffee_price: "£2.40",
        },
        CafeForm {
            name: "Social - Copeland Road",
            map_url: "https://g.page/CopelandSocial",
            img_url: "https://images.squarespace-cdn.com/content/v1/5734f3ff4d088e2c5b08fe13/1555848382269-9F13FE1WQDNUUDQOAOXF/ke17ZwdGBToddI8pDm48kAx9qLOWjaN6xQkOYGHOzVNZw-zPPgdn4jUwVcJE1ZvWQUxwkmyExglNqGp0IvTJZUJFbgE-7XRK3dMEBRBhUpwkCFOLgzJj4yIx-vIIEbyWWRd0QUGL6lY_wBICnBy59Ye9GKQq6_hlXZJyaybXpCc/X2.jpg",
            loc: "Peckham",
            seats: "20-30",
            toilet: yes,
            wifi: yes,
            sockets: yes,
            calls: no,
            coffee_price: "£2.75",
        },
        CafeForm {
            name: "One & All Cafe Peckham",
            map_url: "https://g.page/one-all-cafe",
            img_url: "https://lh3.googleusercontent.com/p/AF1QipOMzXpKAQNyUvrjTGHqCgWb8spwnzZ2G2I1qtxQ=s1360-w1360-h1020",
            loc: "Peckham",
            seats: "20-30",
            toilet: yes,
            wifi: yes,
            sockets: yes,
            calls: no,
            coffee_price: "£2.75",
        },
        CafeForm {
            name: "Mare Street Market",
            map_url: "https://goo.gl/maps/ALR8iBiNN6tVfuAA8",
            img_url: "https://lh3.googleusercontent.com/p/AF1QipNIgHxFJ8mjqBcRi24K9_FkMFz-NQDtnb94y7eC=s1360-w1360-h1020",
            loc: "Hackney",
            seats: "50+",
            toilet: yes,
            wifi: yes,
            sockets: no,
            calls: no,
            coffee_price: "£2.80",
        },
        CafeForm {
            name: "Ace Hotel Shoreditch",
            map_url: "https://goo.gl/maps/Dr7PDRLpAMwHZNQe6",
            img_url: "https://lh3.googleusercontent.com/p/AF1QipMAnisxHvSt7ZO2b9WrBmnkTdm54CGHwGDnP7yM=s1360-w1360-h1020",
            loc: "Shoreditch",
            seats: "50+",
            toilet: yes,
            wifi: yes,
            sockets: yes,
            calls: yes,
            coffee_price: "£3.00",
        },
    ]
}

// --- Seeder ---

struct CafeSeeder {
    base_url: String,
    client: Client,
    results: Vec<SeedResult>,
}

impl CafeSeeder {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn add_cafe(&self, cafe: &CafeForm) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/add", self.base_url))
            .form(cafe)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = match response.json::<ApiError>().await {
            Ok(body) => body
                .error
                .into_iter()
                .map(|(label, message)| format!("{}: {}", label, message))
                .collect::<Vec<_>>()
                .join("; "),
            Err(_) => "Unknown error".to_string(),
        };
        bail!("HTTP {} - {}", status, detail)
    }

    async fn run(&mut self) -> Result<()> {
        println!("\n{}🔍 Checking service status at {}...{}", CYAN, self.base_url, RESET);
        if !self.check_service_health().await {
            bail!("service unavailable at {}; start it with `cargo run`", self.base_url);
        }
        println!("{}✅ Service available{}\n", GREEN, RESET);

        let cafes = sample_cafes();
        let total = cafes.len();
        println!("{}☕ Seeding {} cafes...{}\n", BOLD, total, RESET);

        for (i, cafe) in cafes.iter().enumerate() {
            let start_time = Instant::now();
            let outcome = self.add_cafe(cafe).await;
            let duration_secs = start_time.elapsed().as_secs_f64();

            match outcome {
                Ok(()) => {
                    println!("{}[{}/{}] ✅ {} ({}){}", GREEN, i + 1, total, cafe.name, cafe.loc, RESET);
                    self.results.push(SeedResult {
                        name: cafe.name,
                        success: true,
                        detail: String::new(),
                        duration_secs,
                    });
                }
                Err(e) => {
                    println!("{}[{}/{}] ❌ {}: {}{}", RED, i + 1, total, cafe.name, e, RESET);
                    self.results.push(SeedResult {
                        name: cafe.name,
                        success: false,
                        detail: e.to_string(),
                        duration_secs,
                    });
                }
            }
        }

        self.print_summary();

        if self.results.iter().all(|r| !r.success) {
            bail!("no cafe could be added");
        }
        Ok(())
    }

    fn print_summary(&self) {
        println!("\n{}📋 Seed Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────");
        println!("{:<36} {:<8} {:>10}", "Cafe", "Status", "Duration");
        println!("──────────────────────────────────────────────────────────────");

        for res in &self.results {
            let status_icon = if res.success { "✅" } else { "❌" };
            println!("{:<36} {:<8} {:>9.2}s", res.name, status_icon, res.duration_secs);
            if !res.success {
                println!("    {}{}{}", YELLOW, res.detail, RESET);
            }
        }

        let added = self.results.iter().filter(|r| r.success).count();
        println!("──────────────────────────────────────────────────────────────");
        println!("  • Added: {}{}{}", GREEN, added, RESET);
        println!("  • Failed: {}{}{}", RED, self.results.len() - added, RESET);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url = env::args()
        .nth(1)
        .or_else(|| env::var("CAFE_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string());

    let mut seeder = CafeSeeder::new(base_url)?;
    seeder.run().await
}
