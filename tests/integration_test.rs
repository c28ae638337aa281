use corp_registry::clients::{PersonDirectory, PersonError};
use corp_registry::lifecycle::RegistrySystem;
use corp_registry::model::{
    EmployeeCreate, ManagerCreate, Person, PersonId, Role, ValidationError,
};

fn employee(name: &str, title: &str, age: u32, monthly_salary: f64) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        title: title.to_string(),
        age,
        monthly_salary,
    }
}

fn manager(
    name: &str,
    department: &str,
    age: u32,
    monthly_salary: f64,
    annual_bonus: f64,
) -> ManagerCreate {
    ManagerCreate {
        name: name.to_string(),
        department: department.to_string(),
        age,
        monthly_salary,
        annual_bonus,
    }
}

/// Full end-to-end walkthrough against the real registry system.
#[tokio::test]
async fn test_full_registry_walkthrough() {
    let system = RegistrySystem::new();

    // Empty registry: statistics are all zero.
    let stats = system.persons.statistics().await.unwrap();
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average_age, 0.0);
    assert_eq!(stats.average_monthly_salary, 0.0);
    assert_eq!(stats.total_salary_mass, 0.0);

    // Lookup on an empty registry reports NotFound, not a silent default.
    let missing = system.persons.person(PersonId(999)).await;
    assert_eq!(missing, Err(PersonError::NotFound(PersonId(999))));

    let ana = system
        .persons
        .add_employee(employee("Ana", "Developer", 30, 3000.0))
        .await
        .expect("Failed to add employee");
    let luis = system
        .persons
        .add_manager(manager("Luis", "Sales", 45, 5000.0, 1200.0))
        .await
        .expect("Failed to add manager");

    assert_eq!(ana, PersonId(1));
    assert_eq!(luis, PersonId(2));

    // Fetched records are field-equal to what was inserted.
    let fetched = system.persons.person(ana).await.unwrap();
    match &fetched {
        Person::Employee(e) => {
            assert_eq!(e.name, "Ana");
            assert_eq!(e.title, "Developer");
            assert_eq!(e.age, 30);
            assert_eq!(e.monthly_salary, 3000.0);
        }
        _ => panic!("expected an employee"),
    }
    assert_eq!(fetched.role(), Role::Employee);
    assert_eq!(system.persons.person(luis).await.unwrap().role(), Role::Manager);

    // Listing returns both records in id order.
    let roster = system.persons.persons().await.unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].0, ana);
    assert_eq!(roster[1].0, luis);

    // Worked statistics example: bonus excluded from the salary mass.
    let stats = system.persons.statistics().await.unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.average_age, 37.5);
    assert_eq!(stats.average_monthly_salary, 4000.0);
    assert_eq!(stats.total_salary_mass, 8000.0);

    // Removal is unsupported and never mutates.
    assert_eq!(
        system.persons.remove_person(luis).await,
        Err(PersonError::NotImplemented("remove"))
    );
    assert_eq!(
        system.persons.remove_person(PersonId(999)).await,
        Err(PersonError::NotFound(PersonId(999)))
    );
    assert_eq!(system.persons.persons().await.unwrap().len(), 2);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Failed validation must not consume an identifier.
#[tokio::test]
async fn test_rejected_additions_leave_the_sequence_dense() {
    let system = RegistrySystem::new();

    let first = system
        .persons
        .add_employee(employee("Ana", "Developer", 30, 3000.0))
        .await
        .unwrap();

    let blank_name = system
        .persons
        .add_employee(employee("   ", "Developer", 30, 3000.0))
        .await;
    assert_eq!(
        blank_name,
        Err(PersonError::Validation(ValidationError::EmptyField {
            field: "name"
        }))
    );

    let negative_bonus = system
        .persons
        .add_manager(manager("Luis", "Sales", 45, 5000.0, -1.0))
        .await;
    assert!(matches!(
        negative_bonus,
        Err(PersonError::Validation(ValidationError::InvalidAmount {
            field: "annual_bonus",
            ..
        }))
    ));

    let implausible_age = system
        .persons
        .add_employee(employee("Eva", "Analyst", 130, 2500.0))
        .await;
    assert_eq!(
        implausible_age,
        Err(PersonError::Validation(ValidationError::AgeOutOfRange {
            value: 130
        }))
    );

    let second = system
        .persons
        .add_employee(employee("Eva", "Analyst", 28, 2500.0))
        .await
        .unwrap();

    assert_eq!(first, PersonId(1));
    assert_eq!(second, PersonId(2));
    assert_eq!(system.persons.persons().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

/// Concurrent additions must receive unique, dense identifiers.
#[tokio::test]
async fn test_concurrent_additions() {
    let system = RegistrySystem::new();

    let mut handles = vec![];
    for i in 0..25u32 {
        let persons = system.persons.clone();
        let handle = tokio::spawn(async move {
            persons
                .add_employee(employee(
                    &format!("Employee {i}"),
                    "Developer",
                    25 + (i % 10),
                    2000.0,
                ))
                .await
        });
        handles.push(handle);
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().expect("add must succeed"));
    }

    // Regardless of interleaving, the assigned ids are exactly 1..=25.
    ids.sort();
    let expected: Vec<PersonId> = (1..=25).map(PersonId).collect();
    assert_eq!(ids, expected);

    let stats = system.persons.statistics().await.unwrap();
    assert_eq!(stats.count, 25);
    assert_eq!(stats.total_salary_mass, 25.0 * 2000.0);

    system.shutdown().await.unwrap();
}

/// Snapshots returned by `persons` are unaffected by later additions.
#[tokio::test]
async fn test_list_snapshot_is_stable() {
    let system = RegistrySystem::new();

    system
        .persons
        .add_employee(employee("Ana", "Developer", 30, 3000.0))
        .await
        .unwrap();

    let snapshot = system.persons.persons().await.unwrap();
    assert_eq!(snapshot.len(), 1);

    system
        .persons
        .add_manager(manager("Luis", "Sales", 45, 5000.0, 1200.0))
        .await
        .unwrap();

    assert_eq!(snapshot.len(), 1, "existing snapshot must not grow");
    assert_eq!(system.persons.persons().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}
