use agenda_core::{
    params::{AppointmentCreate, AppointmentUpdate, ContactCreate},
    AgendaError, Contact, Database, User,
};
use jiff::civil::{date, DateTime};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Seed one contact and one user so appointment foreign keys resolve
fn seed_directory(db: &mut Database) -> (Contact, User) {
    let contact = db
        .create_contact(&ContactCreate {
            name: "Anika Costa".to_string(),
            email: Some("anika@example.com".to_string()),
        })
        .expect("Failed to create contact");
    let user = db
        .create_user("admin", "admin")
        .expect("Failed to create user");
    (contact, user)
}

fn dt(s: &str) -> DateTime {
    s.parse().expect("Failed to parse datetime")
}

fn appointment_params(contact_name: &str, user_id: u64, start: &str, end: &str) -> AppointmentCreate {
    AppointmentCreate {
        contact_name: contact_name.to_string(),
        title: "Kickoff".to_string(),
        description: "Project kickoff meeting".to_string(),
        location: "Room 2".to_string(),
        kind: "Planning Session".to_string(),
        start_at: dt(start),
        end_at: dt(end),
        customer_id: 3,
        user_id,
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Database should be initialized and ready to use
    assert!(_temp_file.path().exists());
}

#[test]
fn test_schema_is_idempotent_across_reopens() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        seed_directory(&mut db);
    }
    // Reopening applies the schema again without clobbering data
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_contacts().expect("Failed to list contacts").len(), 1);
    assert_eq!(db.list_users().expect("Failed to list users").len(), 1);
}

#[test]
fn test_create_contact_and_lookup_by_name() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_contact(&ContactCreate {
            name: "Anika Costa".to_string(),
            email: None,
        })
        .expect("Failed to create contact");
    assert!(created.id > 0);

    let found = db
        .get_contact_by_name("Anika Costa")
        .expect("Lookup query failed")
        .expect("Contact should exist");
    assert_eq!(found, created);

    // Unknown name is Ok(None), not an error
    let missing = db
        .get_contact_by_name("Nobody")
        .expect("Lookup query failed");
    assert!(missing.is_none());
}

#[test]
fn test_country_gateway_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    db.create_country("Canada").expect("Failed to create country");
    db.create_country("Japan").expect("Failed to create country");

    let countries = db.list_countries().expect("Failed to list countries");
    assert_eq!(countries.len(), 2);

    let japan = db
        .get_country_by_name("Japan")
        .expect("Lookup query failed")
        .expect("Country should exist");
    assert_eq!(japan.name, "Japan");

    assert!(db
        .get_country_by_name("Atlantis")
        .expect("Lookup query failed")
        .is_none());
}

#[test]
fn test_check_credentials_exact_match_only() {
    let (_temp_file, mut db) = create_test_db();

    db.create_user("admin", "Secret1").expect("Failed to create user");

    assert!(db.check_credentials("admin", "Secret1").expect("Query failed"));

    // Any single-field mismatch fails, including case differences
    assert!(!db.check_credentials("admin", "secret1").expect("Query failed"));
    assert!(!db.check_credentials("Admin", "Secret1").expect("Query failed"));
    assert!(!db.check_credentials("admin", "wrong").expect("Query failed"));
    assert!(!db.check_credentials("other", "Secret1").expect("Query failed"));
}

#[test]
fn test_list_users() {
    let (_temp_file, mut db) = create_test_db();

    db.create_user("admin", "admin").expect("Failed to create user");
    db.create_user("test", "test").expect("Failed to create user");

    let users = db.list_users().expect("Failed to list users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "admin");
}

#[test]
fn test_create_appointment_resolves_contact_and_round_trips() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    let params = appointment_params(&contact.name, user.id, "2024-03-15T10:00", "2024-03-15T11:00");
    let created = db
        .create_appointment(&params)
        .expect("Failed to create appointment");

    assert!(created.id > 0);
    assert_eq!(created.contact_id, contact.id);
    assert_eq!(created.contact_name, contact.name);

    let fetched = db
        .get_appointment(created.id)
        .expect("Failed to get appointment")
        .expect("Appointment should exist");

    // Every input field survives the round trip
    assert_eq!(fetched, created);
    assert_eq!(fetched.title, params.title);
    assert_eq!(fetched.description, params.description);
    assert_eq!(fetched.location, params.location);
    assert_eq!(fetched.kind, params.kind);
    assert_eq!(fetched.start_at, params.start_at);
    assert_eq!(fetched.end_at, params.end_at);
    assert_eq!(fetched.customer_id, params.customer_id);
    assert_eq!(fetched.user_id, params.user_id);
}

#[test]
fn test_create_appointment_unknown_contact_fails() {
    let (_temp_file, mut db) = create_test_db();
    let (_contact, user) = seed_directory(&mut db);

    let params = appointment_params("Nobody", user.id, "2024-03-15T10:00", "2024-03-15T11:00");
    let err = db
        .create_appointment(&params)
        .expect_err("Creation should fail for unknown contact");
    assert!(matches!(err, AgendaError::ContactNotFound { ref name } if name == "Nobody"));
}

#[test]
fn test_update_appointment_overwrites_every_field() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);
    let other_contact = db
        .create_contact(&ContactCreate {
            name: "Leo Marsh".to_string(),
            email: None,
        })
        .expect("Failed to create contact");

    let created = db
        .create_appointment(&appointment_params(
            &contact.name,
            user.id,
            "2024-03-15T10:00",
            "2024-03-15T11:00",
        ))
        .expect("Failed to create appointment");

    let update = AppointmentUpdate {
        fields: AppointmentCreate {
            contact_name: other_contact.name.clone(),
            title: "Rescheduled kickoff".to_string(),
            description: "Moved to the afternoon".to_string(),
            location: "Room 5".to_string(),
            kind: "De-Briefing".to_string(),
            start_at: dt("2024-03-16T14:00"),
            end_at: dt("2024-03-16T15:30"),
            customer_id: 9,
            user_id: user.id,
        },
        id: created.id,
    };
    let updated = db
        .update_appointment(&update)
        .expect("Failed to update appointment");
    assert_eq!(updated.contact_id, other_contact.id);

    let fetched = db
        .get_appointment(created.id)
        .expect("Failed to get appointment")
        .expect("Appointment should exist");
    assert_eq!(fetched.title, "Rescheduled kickoff");
    assert_eq!(fetched.description, "Moved to the afternoon");
    assert_eq!(fetched.location, "Room 5");
    assert_eq!(fetched.kind, "De-Briefing");
    assert_eq!(fetched.start_at, dt("2024-03-16T14:00"));
    assert_eq!(fetched.end_at, dt("2024-03-16T15:30"));
    assert_eq!(fetched.customer_id, 9);
    assert_eq!(fetched.contact_name, "Leo Marsh");
}

#[test]
fn test_update_missing_appointment_is_not_found() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    let update = AppointmentUpdate {
        fields: appointment_params(&contact.name, user.id, "2024-03-15T10:00", "2024-03-15T11:00"),
        id: 999,
    };
    let err = db
        .update_appointment(&update)
        .expect_err("Update of missing row should fail");
    assert!(matches!(err, AgendaError::AppointmentNotFound { id: 999 }));
}

#[test]
fn test_delete_appointment_then_lookup_is_none() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    let created = db
        .create_appointment(&appointment_params(
            &contact.name,
            user.id,
            "2024-03-15T10:00",
            "2024-03-15T11:00",
        ))
        .expect("Failed to create appointment");

    db.delete_appointment(created.id)
        .expect("Failed to delete appointment");

    assert!(db
        .get_appointment(created.id)
        .expect("Lookup query failed")
        .is_none());

    // Deleting again distinguishes "nothing to delete" from a failed query
    let err = db
        .delete_appointment(created.id)
        .expect_err("Second delete should report not found");
    assert!(matches!(err, AgendaError::AppointmentNotFound { .. }));
}

#[test]
fn test_list_appointments_by_customer() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    let mut params =
        appointment_params(&contact.name, user.id, "2024-03-15T10:00", "2024-03-15T11:00");
    db.create_appointment(&params).expect("Failed to create appointment");
    params.customer_id = 4;
    db.create_appointment(&params).expect("Failed to create appointment");
    db.create_appointment(&params).expect("Failed to create appointment");

    let for_three = db
        .list_appointments_by_customer(3)
        .expect("Failed to list by customer");
    assert_eq!(for_three.len(), 1);

    let for_four = db
        .list_appointments_by_customer(4)
        .expect("Failed to list by customer");
    assert_eq!(for_four.len(), 2);
    assert!(for_four.iter().all(|a| a.customer_id == 4));

    assert!(db
        .list_appointments_by_customer(99)
        .expect("Failed to list by customer")
        .is_empty());
}

#[test]
fn test_month_window_with_fixed_clock() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    db.create_appointment(&appointment_params(
        &contact.name,
        user.id,
        "2024-03-15T10:00",
        "2024-03-15T11:00",
    ))
    .expect("Failed to create appointment");

    // Included when "today" is 2024-03-20, excluded when it is 2024-04-01
    let march = db
        .list_appointments_in_month(date(2024, 3, 20))
        .expect("Failed to list month");
    assert_eq!(march.len(), 1);

    let april = db
        .list_appointments_in_month(date(2024, 4, 1))
        .expect("Failed to list month");
    assert!(april.is_empty());
}

#[test]
fn test_month_window_boundaries_are_half_open() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    // Midnight on the first of the month is in; midnight on the first of the
    // next month is out.
    db.create_appointment(&appointment_params(
        &contact.name,
        user.id,
        "2024-03-01T00:00",
        "2024-03-01T01:00",
    ))
    .expect("Failed to create appointment");
    db.create_appointment(&appointment_params(
        &contact.name,
        user.id,
        "2024-04-01T00:00",
        "2024-04-01T01:00",
    ))
    .expect("Failed to create appointment");

    let march = db
        .list_appointments_in_month(date(2024, 3, 20))
        .expect("Failed to list month");
    assert_eq!(march.len(), 1);
    assert_eq!(march[0].start_at, dt("2024-03-01T00:00"));
}

#[test]
fn test_week_window_with_fixed_clock() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    // Wednesday 2024-03-20; its ISO week runs Mon 03-18 through Sun 03-24
    db.create_appointment(&appointment_params(
        &contact.name,
        user.id,
        "2024-03-20T09:00",
        "2024-03-20T10:00",
    ))
    .expect("Failed to create appointment");

    for today in [date(2024, 3, 18), date(2024, 3, 20), date(2024, 3, 24)] {
        let week = db
            .list_appointments_in_week(today)
            .expect("Failed to list week");
        assert_eq!(week.len(), 1, "expected a hit for {today}");
    }

    for today in [date(2024, 3, 17), date(2024, 3, 25)] {
        let week = db
            .list_appointments_in_week(today)
            .expect("Failed to list week");
        assert!(week.is_empty(), "expected no hit for {today}");
    }
}

#[test]
fn test_month_listing_is_subset_of_list_all() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    for (start, end) in [
        ("2024-03-05T09:00", "2024-03-05T10:00"),
        ("2024-03-28T09:00", "2024-03-28T10:00"),
        ("2024-04-02T09:00", "2024-04-02T10:00"),
        ("2023-03-10T09:00", "2023-03-10T10:00"),
    ] {
        db.create_appointment(&appointment_params(&contact.name, user.id, start, end))
            .expect("Failed to create appointment");
    }

    let all = db.list_appointments().expect("Failed to list appointments");
    assert_eq!(all.len(), 4);

    let march_2024 = db
        .list_appointments_in_month(date(2024, 3, 20))
        .expect("Failed to list month");
    assert_eq!(march_2024.len(), 2);
    assert!(march_2024.iter().all(|a| all.contains(a)));
}

#[test]
fn test_report_by_type_and_month_groups_across_years() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    let mut params =
        appointment_params(&contact.name, user.id, "2024-03-05T09:00", "2024-03-05T10:00");
    db.create_appointment(&params).expect("Failed to create appointment");

    // Same month of a different year lands in the same group
    params.start_at = dt("2023-03-10T09:00");
    params.end_at = dt("2023-03-10T10:00");
    db.create_appointment(&params).expect("Failed to create appointment");

    params.kind = "De-Briefing".to_string();
    params.start_at = dt("2024-04-02T09:00");
    params.end_at = dt("2024-04-02T10:00");
    db.create_appointment(&params).expect("Failed to create appointment");

    let rows = db
        .report_by_type_and_month()
        .expect("Failed to run type/month report");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].month, 3);
    assert_eq!(rows[0].kind, "Planning Session");
    assert_eq!(rows[0].total, 2);
    assert_eq!(rows[0].month_name(), "March");

    assert_eq!(rows[1].month, 4);
    assert_eq!(rows[1].kind, "De-Briefing");
    assert_eq!(rows[1].total, 1);
}

#[test]
fn test_report_by_contact_orders_by_contact() {
    let (_temp_file, mut db) = create_test_db();
    let (first, user) = seed_directory(&mut db);
    let second = db
        .create_contact(&ContactCreate {
            name: "Leo Marsh".to_string(),
            email: None,
        })
        .expect("Failed to create contact");

    // Insert against the second contact first to prove ordering comes from
    // the query, not insertion order
    db.create_appointment(&appointment_params(
        &second.name,
        user.id,
        "2024-03-05T09:00",
        "2024-03-05T10:00",
    ))
    .expect("Failed to create appointment");
    db.create_appointment(&appointment_params(
        &first.name,
        user.id,
        "2024-03-06T09:00",
        "2024-03-06T10:00",
    ))
    .expect("Failed to create appointment");

    let rows = db.report_by_contact().expect("Failed to run contact report");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].contact_id, first.id);
    assert_eq!(rows[1].contact_id, second.id);
    assert_eq!(rows[0].title, "Kickoff");
}

#[test]
fn test_report_by_customer_counts_per_type() {
    let (_temp_file, mut db) = create_test_db();
    let (contact, user) = seed_directory(&mut db);

    let mut params =
        appointment_params(&contact.name, user.id, "2024-03-05T09:00", "2024-03-05T10:00");
    db.create_appointment(&params).expect("Failed to create appointment");
    db.create_appointment(&params).expect("Failed to create appointment");

    params.customer_id = 8;
    params.kind = "De-Briefing".to_string();
    db.create_appointment(&params).expect("Failed to create appointment");

    let rows = db
        .report_by_customer()
        .expect("Failed to run customer report");
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].customer_id, rows[0].total), (3, 2));
    assert_eq!((rows[1].customer_id, rows[1].total), (8, 1));
    assert_eq!(rows[1].kind, "De-Briefing");
}
