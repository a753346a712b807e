use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use serde::Serialize;
use wafipset::{Disposition, Entry, ErrorKind, Plan, Reconciliation, UpdateCommand};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Report Rows
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Status {
    Insert,
    Exists,
    Excluded,
    Invalid,
    Range,
    IPv6,
}

impl Status {
    fn color(&self) -> Color {
        match self {
            Status::Insert => Color::Green,
            Status::Exists => Color::Cyan,
            Status::Excluded => Color::Yellow,
            Status::Invalid => Color::Red,
            Status::Range => Color::Magenta,
            Status::IPv6 => Color::Blue,
        }
    }
}

/// One line of the per-network report.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReportRow {
    pub network: String,
    pub status: Status,
    pub detail: String,

    /// Set for blocks summarized from a range
    #[serde(skip)]
    pub nested: bool,
}

/// Flatten a plan into report rows. `compared` is true when networks were checked against a
/// live IPSet.
pub fn report_rows(plan: &Plan, compared: bool) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for entry in plan.entries() {
        match entry {
            Entry::Network(candidate) => {
                rows.push(candidate_row(&candidate.token, &candidate.disposition, compared, false))
            }
            Entry::Range { token, result } => match result {
                Ok(candidates) => {
                    rows.push(ReportRow {
                        network: token.clone(),
                        status: Status::Range,
                        detail: format!("Range summarized to {} network(s)", candidates.len()),
                        nested: false,
                    });
                    rows.extend(candidates.iter().map(|candidate| {
                        candidate_row(&candidate.token, &candidate.disposition, compared, true)
                    }));
                }
                Err(error) => rows.push(ReportRow {
                    network: token.clone(),
                    status: Status::Invalid,
                    detail: capitalize(&error.to_string()),
                    nested: false,
                }),
            },
            Entry::Ipv6 { token, result } => rows.push(ReportRow {
                network: token.clone(),
                status: Status::IPv6,
                detail: match result {
                    Ok(_) => "Valid IPv6 network; IPv6 networks are not submitted".to_string(),
                    Err(error) => capitalize(&error.to_string()),
                },
                nested: false,
            }),
        }
    }

    rows
}

fn candidate_row(token: &str, disposition: &Disposition, compared: bool, nested: bool) -> ReportRow {
    let (network, status, detail) = match disposition {
        Disposition::Accepted(network) => (
            network.to_string(),
            Status::Insert,
            if compared {
                format!("The CIDR '{network}' does NOT exist within the IPSet")
            } else {
                "Valid global IPv4 network".to_string()
            },
        ),
        Disposition::Duplicate(network) => (
            network.to_string(),
            Status::Exists,
            format!("The CIDR '{network}' exists within the IPSet"),
        ),
        Disposition::Rejected(error) => (
            token.to_string(),
            match error.kind() {
                ErrorKind::Routability => Status::Excluded,
                ErrorKind::Parse | ErrorKind::Range => Status::Invalid,
            },
            capitalize(&error.to_string()),
        ),
    };

    ReportRow {
        network,
        status,
        detail,
        nested,
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/*--------------------------------------------------------------------------------------
  Report Table
--------------------------------------------------------------------------------------*/

pub fn report_table(rows: &[ReportRow]) {
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Network")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Status")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Detail")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for row in rows {
        let network = if row.nested {
            Cell::new(format!("    {}", row.network))
        } else {
            Cell::new(&row.network).add_attribute(Attribute::Bold)
        };

        table.add_row(vec![
            network,
            Cell::new(format!("{:?}", row.status)).fg(row.status.color()),
            Cell::new(&row.detail),
        ]);
    }

    println!("{table}");
}

/*--------------------------------------------------------------------------------------
  Summary
--------------------------------------------------------------------------------------*/

pub fn summary(reconciliation: &Reconciliation) {
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    if let Some(reference_set) = &reconciliation.reference_set {
        summary_table.add_row(vec![
            Cell::new(reference_set.len()),
            Cell::new("Nets in the WAF IPSet"),
        ]);
    }
    summary_table.add_row(vec![
        Cell::new(reconciliation.plan.token_count()),
        Cell::new("Nets provided"),
    ]);
    summary_table.add_row(vec![
        Cell::new(reconciliation.plan.update_count()),
        Cell::new("Updates to the WAF IPSet"),
    ]);

    let summary_numbers_column = summary_table
        .column_mut(0)
        .expect("The first column exists");
    summary_numbers_column.set_cell_alignment(CellAlignment::Right);

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  Update Command
--------------------------------------------------------------------------------------*/

pub fn nothing_to_update() {
    println!("\nNo WAF IPSet updates necessary");
}

pub fn update_command(command: &UpdateCommand) {
    if let Some(change_token_command) = command.change_token_command() {
        println!(
            "\nChange token not specified. Request a change token by using the following command:"
        );
        println!("{change_token_command}");
    }

    println!("\nUpdate the WAF IPSet via the following command:");
    println!("{command}\n");
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
