//! Demo wiring: the task service against the in-memory adapters.
//!
//! Walks the whole surface once: seed users, create tasks, report progress,
//! read the listings, show a refused cross-user update, delete.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use pacer_core::domain::{AddTask, TaskError, UserRecord};
use pacer_core::impls::{InMemoryTaskStore, InMemoryUserDirectory};
use pacer_core::ports::{IdGenerator, SystemClock, UlidGenerator, UserDirectory};
use pacer_core::TaskService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Wire the service with the dev adapters.
    let store = Arc::new(InMemoryTaskStore::new());
    let users = Arc::new(InMemoryUserDirectory::new());
    let service = TaskService::builder()
        .store(store.clone())
        .users(users.clone())
        .build()?;

    // Seed two users. Account creation is not the service's job, so the
    // directory is populated directly.
    let ids = UlidGenerator::new(SystemClock);
    let alice = ids.generate_user_id();
    let bob = ids.generate_user_id();
    users.add_user(UserRecord::new(alice, "alice")).await;
    users.add_user(UserRecord::new(bob, "bob")).await;

    let resolved = users.find_by_username("alice").await?.expect("seeded above");
    info!(user = %resolved.id, "resolved alice by username");

    // Create two tasks for alice: one with an explicit deadline, one on the
    // default 7-day window.
    let report = service
        .add_one(
            AddTask {
                name: "Write report".to_string(),
                deadline: Some(chrono::Utc::now() + Duration::hours(8)),
            },
            alice,
        )
        .await?;
    service
        .add_one(
            AddTask {
                name: "Review slides".to_string(),
                deadline: None,
            },
            alice,
        )
        .await?;

    // Report progress on the first one.
    service.update_progress(report, 50, alice).await?;
    service.update_progress(report, 100, alice).await?;

    println!("-- alice's home listing --");
    println!("{}", serde_json::to_string_pretty(&service.home(alice).await?)?);

    println!("-- report detail --");
    println!(
        "{}",
        serde_json::to_string_pretty(&service.detail(report, alice).await?)?
    );

    // Bob cannot touch alice's task.
    match service.update_progress(report, 10, bob).await {
        Err(TaskError::NotOwner(task)) => info!(%task, "bob was refused, as expected"),
        other => return Err(format!("expected an ownership refusal, got {other:?}").into()),
    }

    // Clean up.
    service.remove(report, alice).await?;
    println!("-- alice's home listing after removal --");
    println!("{}", serde_json::to_string_pretty(&service.home(alice).await?)?);

    Ok(())
}
