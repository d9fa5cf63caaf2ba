//! Const SQL for the sqlite repository. Soft-deletable tables carry the
//! active-rows filter (`deleted_at IS NULL`) here, in one place, so a
//! soft-deleted row can never leak into a list/read by omission.

// -- pets --------------------------------------------------------------

pub const QUERY_GET_ALL_PETS: &str = r#"
SELECT
    id,name,pet_type,breed,gender,birthday,admission_date,location_id,
    picture,nickname,notes,adopted,created_at,updated_at
FROM pet
WHERE deleted_at IS NULL;
"#;

pub const QUERY_GET_PET_BY_ID: &str = r#"
SELECT
    id,name,pet_type,breed,gender,birthday,admission_date,location_id,
    picture,nickname,notes,adopted,created_at,updated_at
FROM pet
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_INSERT_PET: &str = r#"
INSERT INTO pet (
    name,pet_type,breed,gender,birthday,admission_date,location_id,
    picture,nickname,notes,adopted,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13);
"#;

pub const QUERY_UPDATE_PET: &str = r#"
UPDATE pet
    SET name = $2,
    pet_type = $3,
    breed = $4,
    gender = $5,
    birthday = $6,
    admission_date = $7,
    location_id = $8,
    picture = $9,
    nickname = $10,
    notes = $11,
    adopted = $12,
    updated_at = $13
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_SOFT_DELETE_PET: &str = r#"
UPDATE pet SET deleted_at = $2, updated_at = $2
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_DELETE_PET_SCHEDULES: [&str; 6] = [
    "DELETE FROM pet_food WHERE pet_id = $1;",
    "DELETE FROM medication_schedule WHERE pet_id = $1;",
    "DELETE FROM vaccination_schedule WHERE pet_id = $1;",
    "DELETE FROM checks_schedule WHERE pet_id = $1;",
    "DELETE FROM injury_report WHERE pet_id = $1;",
    "DELETE FROM pet_adoption WHERE pet_id = $1;",
];

// -- locations ---------------------------------------------------------

pub const QUERY_GET_ALL_LOCATIONS: &str = r#"
SELECT id,name,address,phone,notes,created_at,updated_at
FROM location
WHERE deleted_at IS NULL;
"#;

pub const QUERY_GET_LOCATION_BY_ID: &str = r#"
SELECT id,name,address,phone,notes,created_at,updated_at
FROM location
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_INSERT_LOCATION: &str = r#"
INSERT INTO location (name,address,phone,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_UPDATE_LOCATION: &str = r#"
UPDATE location
    SET name = $2,
    address = $3,
    phone = $4,
    notes = $5,
    updated_at = $6
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_UNLINK_LOCATION_PETS: &str = r#"
UPDATE pet SET location_id = NULL, updated_at = $2
WHERE location_id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_SOFT_DELETE_LOCATION: &str = r#"
UPDATE location SET deleted_at = $2, updated_at = $2
WHERE id = $1 AND deleted_at IS NULL;
"#;

// -- frequencies -------------------------------------------------------

pub const QUERY_GET_ALL_FREQUENCIES: &str = r#"
SELECT id,name,interval_days,created_at,updated_at FROM frequency;
"#;

pub const QUERY_GET_FREQUENCY_BY_ID: &str = r#"
SELECT id,name,interval_days,created_at,updated_at FROM frequency WHERE id = $1;
"#;

pub const QUERY_GET_FREQUENCY_BY_NAME: &str = r#"
SELECT id,name,interval_days,created_at,updated_at FROM frequency WHERE name = $1;
"#;

pub const QUERY_INSERT_FREQUENCY: &str = r#"
INSERT INTO frequency (name,interval_days,created_at,updated_at) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_UPDATE_FREQUENCY: &str = r#"
UPDATE frequency SET name = $2, interval_days = $3, updated_at = $4 WHERE id = $1;
"#;

pub const QUERY_DELETE_FREQUENCY: &str = r#"DELETE FROM frequency WHERE id = $1;"#;

// -- foods -------------------------------------------------------------

pub const QUERY_GET_ALL_FOODS: &str = r#"
SELECT id,name,food_type,amount,notes,created_at,updated_at
FROM food
WHERE deleted_at IS NULL;
"#;

pub const QUERY_GET_FOOD_BY_ID: &str = r#"
SELECT id,name,food_type,amount,notes,created_at,updated_at
FROM food
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_INSERT_FOOD: &str = r#"
INSERT INTO food (name,food_type,amount,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_UPDATE_FOOD: &str = r#"
UPDATE food
    SET name = $2,
    food_type = $3,
    amount = $4,
    notes = $5,
    updated_at = $6
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_SOFT_DELETE_FOOD: &str = r#"
UPDATE food SET deleted_at = $2, updated_at = $2
WHERE id = $1 AND deleted_at IS NULL;
"#;

// -- medications -------------------------------------------------------

pub const QUERY_GET_ALL_MEDICATIONS: &str = r#"
SELECT id,name,med_type,notes,created_at,updated_at
FROM medication
WHERE deleted_at IS NULL;
"#;

pub const QUERY_GET_MEDICATION_BY_ID: &str = r#"
SELECT id,name,med_type,notes,created_at,updated_at
FROM medication
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_INSERT_MEDICATION: &str = r#"
INSERT INTO medication (name,med_type,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_UPDATE_MEDICATION: &str = r#"
UPDATE medication
    SET name = $2,
    med_type = $3,
    notes = $4,
    updated_at = $5
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_SOFT_DELETE_MEDICATION: &str = r#"
UPDATE medication SET deleted_at = $2, updated_at = $2
WHERE id = $1 AND deleted_at IS NULL;
"#;

// -- vaccines ----------------------------------------------------------

pub const QUERY_GET_ALL_VACCINES: &str = r#"
SELECT
    v.id,v.name,v.mandatory,v.frequency_id,v.notes,v.created_at,v.updated_at,
    f.name AS frequency_name,f.interval_days,
    f.created_at AS frequency_created_at,f.updated_at AS frequency_updated_at
FROM vaccine AS v
INNER JOIN frequency AS f ON (f.id = v.frequency_id)
WHERE v.deleted_at IS NULL;
"#;

pub const QUERY_GET_VACCINE_BY_ID: &str = r#"
SELECT
    v.id,v.name,v.mandatory,v.frequency_id,v.notes,v.created_at,v.updated_at,
    f.name AS frequency_name,f.interval_days,
    f.created_at AS frequency_created_at,f.updated_at AS frequency_updated_at
FROM vaccine AS v
INNER JOIN frequency AS f ON (f.id = v.frequency_id)
WHERE v.id = $1 AND v.deleted_at IS NULL;
"#;

pub const QUERY_GET_VACCINE_BY_NAME: &str = r#"
SELECT
    v.id,v.name,v.mandatory,v.frequency_id,v.notes,v.created_at,v.updated_at,
    f.name AS frequency_name,f.interval_days,
    f.created_at AS frequency_created_at,f.updated_at AS frequency_updated_at
FROM vaccine AS v
INNER JOIN frequency AS f ON (f.id = v.frequency_id)
WHERE v.name = $1 AND v.deleted_at IS NULL;
"#;

pub const QUERY_INSERT_VACCINE: &str = r#"
INSERT INTO vaccine (name,mandatory,frequency_id,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_UPDATE_VACCINE: &str = r#"
UPDATE vaccine
    SET name = $2,
    mandatory = $3,
    frequency_id = $4,
    notes = $5,
    updated_at = $6
WHERE id = $1 AND deleted_at IS NULL;
"#;

pub const QUERY_SOFT_DELETE_VACCINE: &str = r#"
UPDATE vaccine SET deleted_at = $2, updated_at = $2
WHERE id = $1 AND deleted_at IS NULL;
"#;

// -- injuries ----------------------------------------------------------

pub const QUERY_GET_ALL_INJURIES: &str = r#"
SELECT id,description,severity,notes,created_at,updated_at FROM injury;
"#;

pub const QUERY_GET_INJURY_BY_ID: &str = r#"
SELECT id,description,severity,notes,created_at,updated_at FROM injury WHERE id = $1;
"#;

pub const QUERY_INSERT_INJURY: &str = r#"
INSERT INTO injury (description,severity,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_UPDATE_INJURY: &str = r#"
UPDATE injury
    SET description = $2,
    severity = $3,
    notes = $4,
    updated_at = $5
WHERE id = $1;
"#;

pub const QUERY_DELETE_INJURY: &str = r#"DELETE FROM injury WHERE id = $1;"#;

// -- checks ------------------------------------------------------------

pub const QUERY_GET_ALL_CHECKS: &str = r#"
SELECT
    c.id,c.description,c.frequency_id,c.notes,c.created_at,c.updated_at,
    f.name AS frequency_name,f.interval_days,
    f.created_at AS frequency_created_at,f.updated_at AS frequency_updated_at
FROM recurring_check AS c
INNER JOIN frequency AS f ON (f.id = c.frequency_id);
"#;

pub const QUERY_GET_CHECK_BY_ID: &str = r#"
SELECT
    c.id,c.description,c.frequency_id,c.notes,c.created_at,c.updated_at,
    f.name AS frequency_name,f.interval_days,
    f.created_at AS frequency_created_at,f.updated_at AS frequency_updated_at
FROM recurring_check AS c
INNER JOIN frequency AS f ON (f.id = c.frequency_id)
WHERE c.id = $1;
"#;

pub const QUERY_INSERT_CHECK: &str = r#"
INSERT INTO recurring_check (description,frequency_id,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_UPDATE_CHECK: &str = r#"
UPDATE recurring_check
    SET description = $2,
    frequency_id = $3,
    notes = $4,
    updated_at = $5
WHERE id = $1;
"#;

pub const QUERY_DELETE_CHECK: &str = r#"DELETE FROM recurring_check WHERE id = $1;"#;

// -- pet foods ---------------------------------------------------------

pub const QUERY_GET_ALL_PET_FOODS: &str = r#"
SELECT id,pet_id,food_id,frequency_id,amount,notes,created_at,updated_at
FROM pet_food;
"#;

pub const QUERY_GET_PET_FOOD_BY_ID: &str = r#"
SELECT id,pet_id,food_id,frequency_id,amount,notes,created_at,updated_at
FROM pet_food
WHERE id = $1;
"#;

pub const QUERY_INSERT_PET_FOOD: &str = r#"
INSERT INTO pet_food (pet_id,food_id,frequency_id,amount,notes,created_at,updated_at)
VALUES($1,$2,$3,$4,$5,$6,$7);
"#;

pub const QUERY_UPDATE_PET_FOOD: &str = r#"
UPDATE pet_food
    SET pet_id = $2,
    food_id = $3,
    frequency_id = $4,
    amount = $5,
    notes = $6,
    updated_at = $7
WHERE id = $1;
"#;

pub const QUERY_DELETE_PET_FOOD: &str = r#"DELETE FROM pet_food WHERE id = $1;"#;

// -- medication schedules ----------------------------------------------

pub const QUERY_GET_ALL_MEDICATION_SCHEDULES: &str = r#"
SELECT
    id,pet_id,medication_id,frequency_id,date_started,date_ended,notes,
    created_at,updated_at
FROM medication_schedule;
"#;

pub const QUERY_GET_MEDICATION_SCHEDULE_BY_ID: &str = r#"
SELECT
    id,pet_id,medication_id,frequency_id,date_started,date_ended,notes,
    created_at,updated_at
FROM medication_schedule
WHERE id = $1;
"#;

pub const QUERY_INSERT_MEDICATION_SCHEDULE: &str = r#"
INSERT INTO medication_schedule (
    pet_id,medication_id,frequency_id,date_started,date_ended,notes,
    created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8);
"#;

pub const QUERY_UPDATE_MEDICATION_SCHEDULE: &str = r#"
UPDATE medication_schedule
    SET pet_id = $2,
    medication_id = $3,
    frequency_id = $4,
    date_started = $5,
    date_ended = $6,
    notes = $7,
    updated_at = $8
WHERE id = $1;
"#;

pub const QUERY_DELETE_MEDICATION_SCHEDULE: &str =
    r#"DELETE FROM medication_schedule WHERE id = $1;"#;

// -- vaccination schedules ---------------------------------------------

pub const QUERY_GET_ALL_VACCINATION_SCHEDULES: &str = r#"
SELECT
    id,pet_id,vaccine_id,frequency_id,date_given,notes,created_at,updated_at
FROM vaccination_schedule;
"#;

pub const QUERY_GET_VACCINATION_SCHEDULE_BY_ID: &str = r#"
SELECT
    id,pet_id,vaccine_id,frequency_id,date_given,notes,created_at,updated_at
FROM vaccination_schedule
WHERE id = $1;
"#;

pub const QUERY_INSERT_VACCINATION_SCHEDULE: &str = r#"
INSERT INTO vaccination_schedule (
    pet_id,vaccine_id,frequency_id,date_given,notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7);
"#;

pub const QUERY_UPDATE_VACCINATION_SCHEDULE: &str = r#"
UPDATE vaccination_schedule
    SET pet_id = $2,
    vaccine_id = $3,
    frequency_id = $4,
    date_given = $5,
    notes = $6,
    updated_at = $7
WHERE id = $1;
"#;

pub const QUERY_DELETE_VACCINATION_SCHEDULE: &str =
    r#"DELETE FROM vaccination_schedule WHERE id = $1;"#;

// -- check schedules ---------------------------------------------------

pub const QUERY_GET_ALL_CHECKS_SCHEDULES: &str = r#"
SELECT
    id,pet_id,check_id,frequency_id,date_done,notes,created_at,updated_at
FROM checks_schedule;
"#;

pub const QUERY_GET_CHECKS_SCHEDULE_BY_ID: &str = r#"
SELECT
    id,pet_id,check_id,frequency_id,date_done,notes,created_at,updated_at
FROM checks_schedule
WHERE id = $1;
"#;

pub const QUERY_INSERT_CHECKS_SCHEDULE: &str = r#"
INSERT INTO checks_schedule (
    pet_id,check_id,frequency_id,date_done,notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7);
"#;

pub const QUERY_UPDATE_CHECKS_SCHEDULE: &str = r#"
UPDATE checks_schedule
    SET pet_id = $2,
    check_id = $3,
    frequency_id = $4,
    date_done = $5,
    notes = $6,
    updated_at = $7
WHERE id = $1;
"#;

pub const QUERY_DELETE_CHECKS_SCHEDULE: &str =
    r#"DELETE FROM checks_schedule WHERE id = $1;"#;

// -- injury reports ----------------------------------------------------

pub const QUERY_GET_ALL_INJURY_REPORTS: &str = r#"
SELECT
    id,pet_id,injury_id,date_of_injury,report_notes,created_at,updated_at
FROM injury_report;
"#;

pub const QUERY_GET_INJURY_REPORT_BY_ID: &str = r#"
SELECT
    id,pet_id,injury_id,date_of_injury,report_notes,created_at,updated_at
FROM injury_report
WHERE id = $1;
"#;

pub const QUERY_INSERT_INJURY_REPORT: &str = r#"
INSERT INTO injury_report (
    pet_id,injury_id,date_of_injury,report_notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_UPDATE_INJURY_REPORT: &str = r#"
UPDATE injury_report
    SET pet_id = $2,
    injury_id = $3,
    date_of_injury = $4,
    report_notes = $5,
    updated_at = $6
WHERE id = $1;
"#;

pub const QUERY_DELETE_INJURY_REPORT: &str = r#"DELETE FROM injury_report WHERE id = $1;"#;

// -- adoptions ---------------------------------------------------------

pub const QUERY_GET_ALL_PET_ADOPTIONS: &str = r#"
SELECT
    id,pet_id,adopter_name,adoption_date,notes,created_at,updated_at
FROM pet_adoption;
"#;

pub const QUERY_GET_PET_ADOPTION_BY_ID: &str = r#"
SELECT
    id,pet_id,adopter_name,adoption_date,notes,created_at,updated_at
FROM pet_adoption
WHERE id = $1;
"#;

pub const QUERY_GET_PET_ADOPTION_BY_PET_ID: &str = r#"
SELECT
    id,pet_id,adopter_name,adoption_date,notes,created_at,updated_at
FROM pet_adoption
WHERE pet_id = $1;
"#;

pub const QUERY_INSERT_PET_ADOPTION: &str = r#"
INSERT INTO pet_adoption (
    pet_id,adopter_name,adoption_date,notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_UPDATE_PET_ADOPTION: &str = r#"
UPDATE pet_adoption
    SET pet_id = $2,
    adopter_name = $3,
    adoption_date = $4,
    notes = $5,
    updated_at = $6
WHERE id = $1;
"#;

pub const QUERY_DELETE_PET_ADOPTION: &str = r#"DELETE FROM pet_adoption WHERE id = $1;"#;

pub const QUERY_SET_PET_ADOPTED_FLAG: &str = r#"
UPDATE pet SET adopted = $2, updated_at = $3 WHERE id = $1 AND deleted_at IS NULL;
"#;
