//! Line-based front end for [`IntakeSession`].
//!
//! Each step prompts for its controls in form order; an empty answer keeps
//! the current value and `-` clears it. Leaving a step, and the final submit, behave as in the
//! web form: the step's rules must pass, and a submit with errors prints the
//! summary and returns to the first step that needs fixing.

use std::io::{BufRead, Write};

use romi_core::FieldPath;
use romi_core::models::draft::{FieldInput, RawValue};
use romi_core::models::report::Sex;
use romi_intake::{IntakeSession, Notice, NoticeKind, Step};
use romi_storage::KeyValueStore;
use romi_submit::Submitter;

/// How the wizard ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Submitted,
    /// The patient gave up after a failed submission.
    Abandoned,
}

pub async fn run_intake<R, W, T, S>(
    session: &mut IntakeSession,
    submitter: &T,
    store: &S,
    input: &mut R,
    output: &mut W,
) -> eyre::Result<WizardOutcome>
where
    R: BufRead,
    W: Write,
    T: Submitter + ?Sized,
    S: KeyValueStore + ?Sized,
{
    loop {
        let step = session.step();
        writeln!(
            output,
            "\nPaso {}/{}: {}",
            step.index() + 1,
            Step::ALL.len(),
            step.title()
        )?;
        for field in step.fields() {
            prompt_field(session, *field, input, output)?;
        }
        let triage = session.triage();
        writeln!(output, "Triage: {} · {}", triage.level, triage.reason)?;

        if !step.is_last() {
            if let Err(notice) = session.next_step() {
                print_notice(output, &notice)?;
            }
            continue;
        }

        writeln!(output, "\n{}", session.preview())?;
        let notice = session.submit(submitter, store).await;
        print_notice(output, &notice)?;
        if !notice.is_error() {
            if let Some(receipt) = session.receipt() {
                writeln!(output, "{} ({})", receipt.message, receipt.id)?;
            }
            return Ok(WizardOutcome::Submitted);
        }

        let summary = session.summary();
        if summary.is_empty() {
            if !ask_flag("¿Intentar de nuevo?", true, input, output)? {
                return Ok(WizardOutcome::Abandoned);
            }
            continue;
        }
        for entry in &summary {
            writeln!(output, "  - {}", entry.text)?;
        }
        return_to_first_error(session);
    }
}

fn return_to_first_error(session: &mut IntakeSession) {
    let Some(target) = Step::ALL.into_iter().find(|step| {
        step.validated_fields()
            .iter()
            .any(|f| session.error(*f).is_some())
    }) else {
        return;
    };
    while session.step() > target {
        session.prev_step();
    }
}

fn prompt_label(field: FieldPath) -> String {
    match field {
        FieldPath::Symptom(symptom) => symptom.label().to_string(),
        FieldPath::SymptomsOther => "Otros síntomas".to_string(),
        FieldPath::Sex => {
            let options: Vec<&str> = Sex::ALL.iter().map(|s| s.as_str()).collect();
            format!("{} ({})", field.label(), options.join("/"))
        }
        FieldPath::PainLevel => format!("{} (1-10)", field.label()),
        FieldPath::Temperature => format!("{} (°C, opcional)", field.label()),
        FieldPath::Email => format!("{} (opcional)", field.label()),
        other => other.label().to_string(),
    }
}

fn prompt_field<R: BufRead, W: Write>(
    session: &mut IntakeSession,
    field: FieldPath,
    input: &mut R,
    output: &mut W,
) -> eyre::Result<()> {
    let label = prompt_label(field);
    let change = match session.draft().value(field) {
        RawValue::Flag(current) => FieldInput::Flag(ask_flag(&label, current, input, output)?),
        RawValue::Text(current) => {
            write!(output, "{label} [{current}]: ")?;
            output.flush()?;
            let line = read_line(input)?;
            match line.as_str() {
                "" => return Ok(()),
                "-" => FieldInput::Text(String::new()),
                _ => FieldInput::Text(line),
            }
        }
        RawValue::Group(_) => return Ok(()),
    };
    session.apply_change(field, change)?;
    // Group errors are shown once, after the last member.
    if matches!(field, FieldPath::Symptom(_)) {
        return Ok(());
    }
    if let Some(error) = session.error(field) {
        writeln!(output, "  ! {}", error.message)?;
    }
    Ok(())
}

fn ask_flag<R: BufRead, W: Write>(
    label: &str,
    current: bool,
    input: &mut R,
    output: &mut W,
) -> eyre::Result<bool> {
    let shown = if current { "s" } else { "n" };
    loop {
        write!(output, "{label} (s/n) [{shown}]: ")?;
        output.flush()?;
        match read_line(input)?.to_lowercase().as_str() {
            "" => return Ok(current),
            "s" | "si" | "sí" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "  Responde s o n.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> eyre::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(eyre::eyre!("input ended before the intake was finished"));
    }
    Ok(line.trim().to_string())
}

fn print_notice<W: Write>(output: &mut W, notice: &Notice) -> eyre::Result<()> {
    writeln!(output, "[{}] {}", notice_tag(notice), notice.text)?;
    Ok(())
}

fn notice_tag(notice: &Notice) -> &'static str {
    match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
        NoticeKind::Info => "info",
    }
}
