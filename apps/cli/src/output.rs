use std::io::{self, Write};

use ceprace_lookup::{AddressRecord, FetchOutcome, LookupReport};

pub fn write_report<W: Write>(out: &mut W, report: &LookupReport) -> io::Result<()> {
    for record in report.outcomes.iter().filter_map(FetchOutcome::record) {
        write_record(out, record)?;
        writeln!(out)?;
    }

    let failures = report.diagnostics.failures();
    let rejections = report.diagnostics.rejections();
    if !failures.is_empty() || !rejections.is_empty() {
        writeln!(out, "Failed providers:")?;
        for (provider, error) in failures.into_iter().chain(rejections) {
            writeln!(out, "  {}: {} ({})", provider, error.kind(), error)?;
        }
        writeln!(out)?;
    }

    match report.result.winner() {
        Some(winner) => writeln!(out, "Fastest provider: {}", winner.provider),
        None => writeln!(out, "No valid result for {}", report.key),
    }
}

fn write_record<W: Write>(out: &mut W, record: &AddressRecord) -> io::Result<()> {
    writeln!(out, "Provider: {}", record.provider)?;
    writeln!(out, "Postal code: {}", record.postal_code)?;
    writeln!(out, "Address: {}", record.address_line)?;
    writeln!(out, "Neighborhood: {}", record.neighborhood)?;
    writeln!(out, "City: {}", record.locality)?;
    writeln!(out, "State: {}", record.region_code)?;
    writeln!(
        out,
        "Received at: {}",
        record.received_at.format("%Y-%m-%d %H:%M:%S%.3f UTC")
    )?;
    match record.elapsed {
        Some(elapsed) => writeln!(out, "Response time: {:?}", elapsed),
        None => writeln!(out, "Response time: n/a"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceprace_lookup::{LookupError, QueryKey, RaceDiagnostics, RaceResult};
    use std::time::Duration;

    fn report(outcomes: Vec<FetchOutcome>, result: RaceResult) -> LookupReport {
        let diagnostics = RaceDiagnostics::from_outcomes(&outcomes);
        LookupReport {
            key: QueryKey::new("88905440"),
            result,
            outcomes,
            diagnostics,
        }
    }

    fn render(report: &LookupReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_winner_is_printed_last() {
        let record = AddressRecord::new(
            "ViaCEP",
            "88905-440",
            "Rua Caetano Lummertz",
            "Cidade Alta",
            "Araranguá",
            "SC",
        )
        .with_elapsed(Duration::from_millis(50));
        let text = render(&report(
            vec![FetchOutcome::Success(record.clone())],
            RaceResult::Winner(record),
        ));

        assert!(text.contains("Provider: ViaCEP"));
        assert!(text.contains("City: Araranguá"));
        assert!(text.contains("Response time: 50ms"));
        assert!(!text.contains("Failed providers"));
        assert!(text.ends_with("Fastest provider: ViaCEP\n"));
    }

    #[test]
    fn test_empty_result_is_explicit() {
        let text = render(&report(
            vec![
                FetchOutcome::failure(LookupError::Timeout {
                    provider: "BrasilAPI".to_string(),
                }),
                FetchOutcome::failure(LookupError::Timeout {
                    provider: "ViaCEP".to_string(),
                }),
            ],
            RaceResult::Empty,
        ));

        assert!(text.contains("Failed providers:"));
        assert!(text.contains("  BrasilAPI: timeout (Timeout: BrasilAPI)"));
        assert!(text.contains("  ViaCEP: timeout (Timeout: ViaCEP)"));
        assert!(text.ends_with("No valid result for 88905440\n"));
    }

    #[test]
    fn test_nothing_received() {
        let text = render(&report(Vec::new(), RaceResult::Empty));
        assert_eq!(text, "No valid result for 88905440\n");
    }
}
