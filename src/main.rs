//! Demo walkthrough of the person registry.
//!
//! Stands in for the out-of-scope boundary layer: drives the full
//! [`PersonDirectory`](corp_registry::clients::PersonDirectory) surface —
//! creation, lookup, listing, statistics, and the intentionally unsupported
//! removal — with structured logging along the way.

use corp_registry::clients::{PersonDirectory, PersonError};
use corp_registry::lifecycle::{setup_tracing, RegistrySystem};
use corp_registry::model::{EmployeeCreate, ManagerCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting person registry");

    let system = RegistrySystem::new();

    let employee_params = EmployeeCreate {
        name: "Ana".to_string(),
        title: "Developer".to_string(),
        age: 30,
        monthly_salary: 3000.0,
    };

    let span = tracing::info_span!("employee_creation");
    let employee_id = async {
        info!("Registering employee");
        system
            .persons
            .add_employee(employee_params)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(%employee_id, "Employee registered");

    let manager_params = ManagerCreate {
        name: "Luis".to_string(),
        department: "Sales".to_string(),
        age: 45,
        monthly_salary: 5000.0,
        annual_bonus: 1200.0,
    };

    let span = tracing::info_span!("manager_creation");
    let manager_id = async {
        info!("Registering manager");
        system
            .persons
            .add_manager(manager_params)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(%manager_id, "Manager registered");

    // Point lookup round-trips the stored record.
    let manager = system
        .persons
        .person(manager_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(%manager_id, name = manager.name(), role = %manager.role(), "Fetched by id");

    // Ordered snapshot of the whole registry.
    let roster = system.persons.persons().await.map_err(|e| e.to_string())?;
    for (id, person) in &roster {
        info!(%id, name = person.name(), role = %person.role(), "Listed");
    }

    let stats = system
        .persons
        .statistics()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        count = stats.count,
        average_age = stats.average_age,
        average_monthly_salary = stats.average_monthly_salary,
        total_salary_mass = stats.total_salary_mass,
        "Registry statistics"
    );

    // Deletion is not supported yet; show both failure shapes.
    match system.persons.remove_person(employee_id).await {
        Err(PersonError::NotImplemented(op)) => {
            warn!(%employee_id, operation = op, "Removal is not supported yet")
        }
        other => warn!(?other, "Unexpected removal outcome"),
    }

    system.shutdown().await?;

    info!("Done");
    Ok(())
}
