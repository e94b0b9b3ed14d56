//! Script parser for the simulated board
//!
//! One statement per line, `#` starts a comment:
//!
//! ```text
//! idle [xN]                 buttons untouched for N cycles
//! reset                     reset button pressed
//! hold <x> <y> <z> [xN]     activation held for N polls at that reading
//! gesture <dir> [xN]        N polls of a 9.81 push; dir is +x..-z or r o y g b v
//! message <0-9>             one gesture per symbol of that message
//! ```

use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use crate::{DEFAULT_GESTURE_POLLS, GESTURE_MAGNITUDE, MAX_REPEAT};
use crate::core::{MessageDictionary, ScriptStep};
use crate::types::{AxisSample, GestureError, MessageIndex, Symbol};

lazy_static! {
    static ref RE_IDLE: Regex = Regex::new(r"(?i)^idle(?:\s+x(\d+))?$").unwrap();

    static ref RE_RESET: Regex = Regex::new(r"(?i)^reset$").unwrap();

    static ref RE_HOLD: Regex = Regex::new(
        r"(?i)^hold\s+([+-]?[0-9]*\.?[0-9]+)\s+([+-]?[0-9]*\.?[0-9]+)\s+([+-]?[0-9]*\.?[0-9]+)(?:\s+x(\d+))?$"
    ).unwrap();

    static ref RE_GESTURE: Regex = Regex::new(
        r"(?i)^gesture\s+([+-][xyz]|[roygbv])(?:\s+x(\d+))?$"
    ).unwrap();

    static ref RE_MESSAGE: Regex = Regex::new(r"(?i)^message\s+(\d+)$").unwrap();
}

/// Parses simulation scripts into board steps
#[derive(Debug, Default)]
pub struct ScriptParser {
    dictionary: MessageDictionary,
}

impl ScriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a script file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<ScriptStep>, GestureError> {
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Parse script text. Errors carry the 1-based line number.
    pub fn parse(&self, text: &str) -> Result<Vec<ScriptStep>, GestureError> {
        let mut steps = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            steps.extend(self.parse_line(i + 1, line)?);
        }
        Ok(steps)
    }

    fn parse_line(&self, n: usize, line: &str) -> Result<Vec<ScriptStep>, GestureError> {
        if let Some(caps) = RE_IDLE.captures(line) {
            let count = repeat_count(n, caps.get(1).map(|m| m.as_str()), 1)?;
            return Ok(vec![ScriptStep::Idle; count]);
        }

        if RE_RESET.is_match(line) {
            return Ok(vec![ScriptStep::Reset]);
        }

        if let Some(caps) = RE_HOLD.captures(line) {
            let axis = |i: usize| -> Result<f32, GestureError> {
                caps[i]
                    .parse::<f32>()
                    .map_err(|e| GestureError::script(n, format!("bad reading '{}': {}", &caps[i], e)))
            };
            let sample = AxisSample::new(axis(1)?, axis(2)?, axis(3)?);
            let count = repeat_count(n, caps.get(4).map(|m| m.as_str()), 1)?;
            return Ok(vec![ScriptStep::Hold(vec![sample; count])]);
        }

        if let Some(caps) = RE_GESTURE.captures(line) {
            let dir = &caps[1];
            let symbol = parse_direction(dir)
                .ok_or_else(|| GestureError::script(n, format!("unknown direction '{}'", dir)))?;
            let count = repeat_count(n, caps.get(2).map(|m| m.as_str()), DEFAULT_GESTURE_POLLS)?;
            return Ok(vec![gesture_step(symbol, count)]);
        }

        if let Some(caps) = RE_MESSAGE.captures(line) {
            let index = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(MessageIndex::new)
                .ok_or_else(|| GestureError::script(n, format!("no message {}", &caps[1])))?;
            return Ok(self
                .dictionary
                .entry(index)
                .iter()
                .map(|&symbol| gesture_step(symbol, DEFAULT_GESTURE_POLLS))
                .collect());
        }

        Err(GestureError::script(n, format!("unrecognized statement '{}'", line)))
    }
}

/// Activation held for `polls` samples pushing toward `symbol`
pub fn gesture_step(symbol: Symbol, polls: usize) -> ScriptStep {
    let (x, y, z) = symbol.direction();
    let sample = AxisSample::new(x * GESTURE_MAGNITUDE, y * GESTURE_MAGNITUDE, z * GESTURE_MAGNITUDE);
    ScriptStep::Hold(vec![sample; polls])
}

fn parse_direction(dir: &str) -> Option<Symbol> {
    Symbol::from_axis_label(dir).or_else(|| {
        let mut chars = dir.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_letter(c),
            _ => None,
        }
    })
}

fn repeat_count(n: usize, raw: Option<&str>, default: usize) -> Result<usize, GestureError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<usize>() {
        Ok(0) => Err(GestureError::script(n, "repeat count must be at least 1")),
        Ok(count) if count > MAX_REPEAT => Err(GestureError::script(
            n,
            format!("repeat count too large (max {})", MAX_REPEAT),
        )),
        Ok(count) => Ok(count),
        Err(e) => Err(GestureError::script(n, format!("bad repeat count '{}': {}", raw, e))),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_statements() {
        let steps = ScriptParser::new()
            .parse("idle x2\nreset\nhold 1.5 -2 9.0 x3\n")
            .unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], ScriptStep::Idle);
        assert_eq!(steps[2], ScriptStep::Reset);
        assert_eq!(steps[3], ScriptStep::Hold(vec![AxisSample::new(1.5, -2.0, 9.0); 3]));
    }

    #[test]
    fn test_gesture_by_label_and_letter() {
        let parser = ScriptParser::new();
        let a = parser.parse("gesture -z").unwrap();
        let b = parser.parse("gesture V").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0], gesture_step(Symbol::NegZ, DEFAULT_GESTURE_POLLS));
    }

    #[test]
    fn test_message_expands_to_gestures() {
        let steps = ScriptParser::new().parse("message 2 # g o g y b").unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1], gesture_step(Symbol::NegX, DEFAULT_GESTURE_POLLS));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let steps = ScriptParser::new().parse("# header\n\n  idle  # rest\n").unwrap();
        assert_eq!(steps, vec![ScriptStep::Idle]);
    }

    #[test]
    fn test_errors_carry_line_number() {
        let parser = ScriptParser::new();
        match parser.parse("idle\nwave hands\n") {
            Err(GestureError::Script { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected script error, got {:?}", other),
        }
        assert!(parser.parse("message 10").is_err());
        assert!(parser.parse("gesture +x x0").is_err());
    }

    #[test]
    fn test_repeat_count_is_capped() {
        let parser = ScriptParser::new();
        assert!(parser.parse("idle x99999999999999999").is_err());
        assert!(parser.parse(&format!("hold 0 0 9 x{}", MAX_REPEAT + 1)).is_err());
        match parser.parse("reset\ngesture +z x5000") {
            Err(GestureError::Script { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("too large"));
            }
            other => panic!("expected script error, got {:?}", other),
        }

        let steps = parser.parse(&format!("idle x{}", MAX_REPEAT)).unwrap();
        assert_eq!(steps.len(), MAX_REPEAT);
    }
}
