//! Line commands and the interactive session.
//!
//! ```text
//!   park <vehicle>              ──► ticket 001 spot 1 ...
//!   unpark <ticket> <vehicle>   ──► receipt R-001 fee 40 ...
//!   status                      ──► occupancy per class
//!   help                        ──► this list
//! ```

use std::io::{self, BufRead, Write};

use parkline_core::{Action, ActionKind, CoreResult, Facility, Outcome, ParkingError};
use tracing::warn;

pub const HELP: &str = "\
Commands:
  park <vehicle>              issue a ticket
  unpark <ticket> <vehicle>   price the stay and issue a receipt
  status                      show occupancy
  help                        show this list

Vehicles: motorcycle, car, suv, bus, truck
";

const TIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    Status,
    Help,
}

/// Parses one input line. Blank lines yield `None`.
///
/// Unknown verbs and missing or extra arguments are
/// [`ParkingError::InvalidAction`]; unknown vehicles are
/// [`ParkingError::UnknownVehicle`].
pub fn parse_command(line: &str) -> CoreResult<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "status" => Command::Status,
        "help" => Command::Help,
        _ => match verb.parse::<ActionKind>()? {
            ActionKind::Enter => {
                let vehicle = argument(words.next(), "park <vehicle>")?.parse()?;
                Command::Action(Action::enter(vehicle))
            }
            ActionKind::Exit => {
                let usage = "unpark <ticket> <vehicle>";
                let ticket_number = argument(words.next(), usage)?;
                let vehicle = argument(words.next(), usage)?.parse()?;
                Command::Action(Action::exit(ticket_number, vehicle))
            }
        },
    };

    if let Some(extra) = words.next() {
        return Err(ParkingError::InvalidAction(format!(
            "unexpected argument '{extra}'"
        )));
    }
    Ok(Some(command))
}

fn argument<'a>(word: Option<&'a str>, usage: &str) -> CoreResult<&'a str> {
    word.ok_or_else(|| ParkingError::InvalidAction(format!("usage: {usage}")))
}

/// Reads commands from `input` until EOF, writing results to `out`.
///
/// Command errors are reported on `out` and the session continues; only
/// I/O failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    facility: &mut Facility,
    input: R,
    out: &mut W,
    json: bool,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Help)) => out.write_all(HELP.as_bytes())?,
            Ok(Some(Command::Status)) => write_status(facility, out)?,
            Ok(Some(Command::Action(action))) => match facility.handle(&action) {
                Ok(outcome) => write_outcome(&outcome, out, json)?,
                Err(e) => report(&e, out)?,
            },
            Err(e) => report(&e, out)?,
        }
        out.flush()?;
    }
    Ok(())
}

fn report<W: Write>(error: &ParkingError, out: &mut W) -> io::Result<()> {
    warn!(error = %error, "Command rejected");
    writeln!(out, "error: {error}")
}

fn write_outcome<W: Write>(outcome: &Outcome, out: &mut W, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(outcome).map_err(io::Error::other)?;
        return writeln!(out, "{line}");
    }

    match outcome {
        Outcome::Ticket(ticket) => writeln!(
            out,
            "ticket {} spot {} entry {}",
            ticket.ticket_number,
            ticket.spot_number,
            ticket.entry_time.format(TIME_FORMAT)
        ),
        Outcome::Receipt(receipt) => writeln!(
            out,
            "receipt {} fee {} entry {} exit {}",
            receipt.receipt_number,
            receipt.fee,
            receipt.entry_time.format(TIME_FORMAT),
            receipt.exit_time.format(TIME_FORMAT)
        ),
    }
}

fn write_status<W: Write>(facility: &Facility, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}): {} parked, {} receipts issued",
        facility.kind(),
        facility.fee_model().charge,
        facility.occupancy(),
        facility.receipts_issued()
    )?;
    for vehicle in facility.inventory().vehicles() {
        writeln!(
            out,
            "  {:<12}{}/{}",
            vehicle,
            facility.ledger().count_of(vehicle),
            facility.inventory().capacity(vehicle).unwrap_or(0)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkline_core::clock::ManualClock;
    use parkline_core::{
        ChargeModel, FacilityKind, FeeModel, InventoryCap, RateSchedule, RateTier, VehicleClass,
    };
    use std::sync::Arc;

    fn mall() -> Facility {
        let model = FeeModel::new(
            ChargeModel::PerHour,
            RateSchedule::new().with(VehicleClass::TwoWheeler, vec![RateTier::new(0, 0, 10)]),
        );
        let inventory = InventoryCap::new().with(VehicleClass::TwoWheeler, 2);
        Facility::new(
            FacilityKind::Mall,
            model,
            inventory,
            Arc::new(ManualClock::from_recent()),
        )
        .unwrap()
    }

    fn session(script: &str, json: bool) -> String {
        let mut facility = mall();
        let mut out = Vec::new();
        run_session(&mut facility, script.as_bytes(), &mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_park() {
        assert_eq!(
            parse_command("park motorcycle").unwrap(),
            Some(Command::Action(Action::enter(VehicleClass::TwoWheeler)))
        );
        assert_eq!(
            parse_command("  PARK  Car/Suv ").unwrap(),
            Some(Command::Action(Action::enter(VehicleClass::FourWheeler)))
        );
    }

    #[test]
    fn test_parse_unpark() {
        assert_eq!(
            parse_command("unpark 002 truck").unwrap(),
            Some(Command::Action(Action::exit("002", VehicleClass::HeavyVehicle)))
        );
    }

    #[test]
    fn test_parse_blank_and_builtins() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("status").unwrap(), Some(Command::Status));
        assert_eq!(parse_command("Help").unwrap(), Some(Command::Help));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("fly motorcycle"),
            Err(ParkingError::InvalidAction("fly".to_string()))
        );
        assert!(matches!(
            parse_command("park"),
            Err(ParkingError::InvalidAction(_))
        ));
        assert!(matches!(
            parse_command("unpark 001"),
            Err(ParkingError::InvalidAction(_))
        ));
        assert!(matches!(
            parse_command("park motorcycle now"),
            Err(ParkingError::InvalidAction(_))
        ));
        assert!(matches!(
            parse_command("park tractor"),
            Err(ParkingError::UnknownVehicle(_))
        ));
    }

    #[test]
    fn test_session_park_status_unpark() {
        let output = session("park motorcycle\nstatus\nunpark 001 motorcycle\n", false);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("ticket 001 spot 1 entry "));
        assert_eq!(lines[1], "Mall (PerHour): 1 parked, 0 receipts issued");
        assert_eq!(lines[2], "  Motorcycle  1/2");
        assert!(lines[3].starts_with("receipt R-001 fee 0 entry "));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let output = session("fly\nunpark 009 motorcycle\npark car\npark motorcycle\n", false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "error: Invalid action: fly");
        assert!(lines[1].starts_with("error: Ticket 009"));
        assert_eq!(lines[2], "error: Car/Suv is not allowed to be parked at Mall");
        assert!(lines[3].starts_with("ticket 001"));
    }

    #[test]
    fn test_session_json_output() {
        let output = session("park motorcycle\n", true);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["ticket"]["ticket_number"], "001");
        assert_eq!(value["ticket"]["spot_number"], 1);
    }
}
