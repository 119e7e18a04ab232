//! Input parser for action inputs
//!
//! Turns the raw `with:` strings into typed values like "a,b:2" or "3".

use crate::config::ActionInputs;
use crate::domain::entities::AssignmentRequest;
use crate::error::AssignError;

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated list of `name` or `name:weight` entries,
/// repeating each name `weight` times in place
pub fn parse_weighted_list(raw: &str) -> Result<Vec<String>, AssignError> {
    let mut values = Vec::new();

    for entry in parse_list(raw) {
        let parts: Vec<&str> = entry.split(':').map(str::trim).collect();
        let (name, weight) = match parts.as_slice() {
            [name] => (*name, 1),
            [name, weight] => (*name, parse_weight(weight)?),
            _ => {
                return Err(AssignError::MalformedInput(format!(
                    "Invalid assignment value: '{}'",
                    entry
                )))
            }
        };

        if name.is_empty() {
            return Err(AssignError::MalformedInput(format!(
                "Invalid assignment value: '{}'",
                entry
            )));
        }

        values.extend(std::iter::repeat(name.to_string()).take(weight));
    }

    Ok(values)
}

fn parse_weight(raw: &str) -> Result<usize, AssignError> {
    match raw.parse::<usize>() {
        Ok(weight) if weight > 0 => Ok(weight),
        _ => Err(AssignError::MalformedInput(format!(
            "Invalid weight value: '{}'",
            raw
        ))),
    }
}

/// Parse a non-negative integer, falling back to `default` when blank
pub fn parse_integer(raw: &str, default: u32) -> Result<u32, AssignError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse()
        .map_err(|_| AssignError::MalformedInput(format!("Invalid integer value: {}", raw)))
}

/// Parse a boolean input the way workflow runners accept them
pub fn parse_bool(raw: &str, default: bool) -> Result<bool, AssignError> {
    match raw.trim() {
        "" => Ok(default),
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(AssignError::MalformedInput(format!(
            "Invalid boolean value: {}",
            other
        ))),
    }
}

/// Build an assignment request from the raw inputs
pub fn parse_request(inputs: &ActionInputs) -> Result<AssignmentRequest, AssignError> {
    let manual_target_number = match parse_integer(&inputs.issue_number, 0)? {
        0 => None,
        number => Some(u64::from(number)),
    };

    Ok(AssignmentRequest {
        explicit_names: parse_weighted_list(&inputs.assignees)?,
        team_names: parse_list(&inputs.teams),
        sample_size: parse_integer(&inputs.num_of_assignee, 0)
            .map_err(|_| AssignError::MalformedInput("Invalid numOfAssignee".to_string()))?,
        abort_if_has_assignees: parse_bool(&inputs.abort_if_previous_assignees, false)?,
        remove_prior_assignees: parse_bool(&inputs.remove_previous_assignees, false)?,
        allow_empty_result: parse_bool(&inputs.allow_no_assignees, false)?,
        allow_self_assign: parse_bool(&inputs.allow_self_assign, true)?,
        manual_target_number,
    })
}
