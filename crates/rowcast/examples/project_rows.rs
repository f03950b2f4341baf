use chrono::NaiveDate;
use rowcast::{impl_record, NullInt64, NullString, Projector, ProjectorConfig, RowProjectExt};
use rowcast_core::Sheet;

struct Employee {
    name: String,
    hired: chrono::NaiveDateTime,
    manager: NullString,
    salary: f64,
    badge: NullInt64,
    password: String,
}

impl_record!(Employee {
    name => "0",
    hired => "1",
    manager => "2",
    salary => "3",
    badge => "4",
    password => "-",
});

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let config = match ProjectorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let projector = Projector::new(config);

    let mut sheet = Sheet::new("Staff");

    // Header from a plain list
    let header = vec!["Name", "Hired", "Manager", "Salary", "Badge"];
    let n = sheet.add_row().write_slice(&header, -1);
    println!("header: {} columns", n);

    let hired = NaiveDate::from_ymd_opt(2021, 4, 12)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default();
    let staff = vec![
        Employee {
            name: "Ann".to_string(),
            hired,
            manager: NullString::null(),
            salary: 5200.0,
            badge: NullInt64::new(1001),
            password: "hunter2".to_string(),
        },
        Employee {
            name: "Bo".to_string(),
            hired,
            manager: NullString::new("Ann".to_string()),
            salary: 4100.5,
            badge: NullInt64::null(),
            password: "swordfish".to_string(),
        },
    ];

    for employee in &staff {
        let row = sheet.add_row();
        match projector.record(row, employee, -1) {
            Ok(written) => println!("{}: {} cells written", employee.name, written),
            Err(e) => eprintln!("{}: {}", employee.name, e),
        }
    }

    for (i, row) in sheet.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.value().as_text()).collect();
        println!("row {}: [{}]", i, cells.join(" | "));
    }

    match serde_json::to_string_pretty(&sheet) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {e}"),
    }
}
