//! Petstore Smoke Verifier
//!
//! Runs the end-to-end conformance scenario against a live petstore
//! deployment: create a pet, read it back, update its status, delete it,
//! and confirm the deletion is visible. Each step is reported; the process
//! exits nonzero if any step fails.

use std::future::Future;

use anyhow::ensure;
use clap::Parser;
use petstore_client::{init_logging, ClientConfig, Pet, PetStatus, PetstoreClient};
use rand::Rng;
use tracing::{error, info};

/// Picks a caller-chosen id unlikely to collide with other demo traffic.
fn random_pet_id() -> i64 {
    rand::thread_rng().gen_range(100_000..1_000_000)
}

/// Runs one scenario step and reports its outcome.
///
/// Returns 1 on failure so the caller can tally.
async fn check<F>(step: &str, outcome: F) -> usize
where
    F: Future<Output = anyhow::Result<()>>,
{
    match outcome.await {
        Ok(()) => {
            info!(step, "ok");
            0
        }
        Err(err) => {
            error!(step, error = %err, "failed");
            1
        }
    }
}

/// Runs the create, read, update, delete, read-after-delete scenario.
///
/// Steps run in order regardless of earlier failures, so the delete step
/// still cleans up the record when an assertion in the middle fails.
async fn run_scenario(client: &PetstoreClient) -> usize {
    let id = random_pet_id();
    let pet = Pet::new(id, "test-pet");
    let mut failures = 0;

    info!(id, "running scenario");

    failures += check("create", async {
        let created = client.create_pet(&pet).await?;
        ensure!(
            created.name == pet.name,
            "created name {:?} does not match {:?}",
            created.name,
            pet.name
        );
        Ok(())
    })
    .await;

    failures += check("read", async {
        let fetched = client.get_pet(id).await?;
        ensure!(fetched.id == id, "fetched id {} does not match {}", fetched.id, id);
        Ok(())
    })
    .await;

    failures += check("update", async {
        let mut updated = Pet::new(id, "updated-pet");
        updated.status = PetStatus::Sold;
        let echoed = client.update_pet(&updated).await?;
        ensure!(
            echoed.status == PetStatus::Sold,
            "updated status {} is not sold",
            echoed.status
        );
        Ok(())
    })
    .await;

    failures += check("delete", async {
        client.delete_pet(id).await?;
        Ok(())
    })
    .await;

    failures += check("read-after-delete", async {
        match client.get_pet(id).await {
            Err(err) if err.is_not_found() => Ok(()),
            Ok(_) => anyhow::bail!("pet {} is still readable after delete", id),
            Err(err) => Err(err.into()),
        }
    })
    .await;

    failures
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(base_url = %config.base_url, "Starting petstore verification");
    let client = PetstoreClient::new(&config)?;

    let failures = run_scenario(&client).await;
    if failures > 0 {
        error!(failures, "Verification finished with failures");
        std::process::exit(1);
    }

    info!("Verification passed");
    Ok(())
}
