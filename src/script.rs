//! Pointer event scripts.
//!
//! A script stands in for the live UI: it picks tools, resizes the canvas and
//! feeds pointer events in order. One command per line:
//!
//! ```text
//! # draw a rectangle, then drag it somewhere else
//! resize 800 600
//! tool rectangle
//! down 10 10
//! move 50 30
//! up
//! tool selection
//! down 20 20
//! move 100 100
//! up 100 100
//! ```
//!
//! Blank lines and `#` comments are ignored. `up` without coordinates releases
//! at the last known pointer position.

use crate::input::{MouseButton, PointerEvent, Tool};
use std::str::FromStr;
use thiserror::Error;

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    /// Select a tool in the tool picker
    Tool(Tool),
    /// Resize the canvas to the given viewport size
    Resize { width: u32, height: u32 },
    /// Feed a pointer event
    Pointer(PointerEvent),
}

/// Errors raised while parsing a script. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArity {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: {message}")]
    InvalidTool { line: usize, message: String },
}

/// A parsed pointer script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub commands: Vec<ScriptCommand>,
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        let mut last_pointer = (0.0, 0.0);

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = raw.split('#').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }

            let mut parts = text.split_whitespace();
            let command = parts.next().unwrap_or_default().to_lowercase();
            let args: Vec<&str> = parts.collect();

            let parsed = match command.as_str() {
                "tool" => {
                    let [name] = args.as_slice() else {
                        return Err(arity(line, "tool", "a tool name"));
                    };
                    let tool = name
                        .parse::<Tool>()
                        .map_err(|message| ScriptError::InvalidTool { line, message })?;
                    ScriptCommand::Tool(tool)
                }
                "resize" => {
                    let [w, h] = args.as_slice() else {
                        return Err(arity(line, "resize", "a width and a height"));
                    };
                    ScriptCommand::Resize {
                        width: parse_number(line, w)?,
                        height: parse_number(line, h)?,
                    }
                }
                "down" | "move" => {
                    let [x, y] = args.as_slice() else {
                        let name = if command == "down" { "down" } else { "move" };
                        return Err(arity(line, name, "x and y coordinates"));
                    };
                    let (x, y) = (parse_number(line, x)?, parse_number(line, y)?);
                    last_pointer = (x, y);
                    if command == "down" {
                        ScriptCommand::Pointer(PointerEvent::Down {
                            button: MouseButton::Left,
                            x,
                            y,
                        })
                    } else {
                        ScriptCommand::Pointer(PointerEvent::Move { x, y })
                    }
                }
                "up" => {
                    let (x, y) = match args.as_slice() {
                        [] => last_pointer,
                        [x, y] => (parse_number(line, x)?, parse_number(line, y)?),
                        _ => return Err(arity(line, "up", "no arguments or x and y coordinates")),
                    };
                    last_pointer = (x, y);
                    ScriptCommand::Pointer(PointerEvent::Up {
                        button: MouseButton::Left,
                        x,
                        y,
                    })
                }
                _ => {
                    return Err(ScriptError::UnknownCommand {
                        line,
                        command: command.clone(),
                    });
                }
            };
            commands.push(parsed);
        }

        Ok(Self { commands })
    }
}

fn arity(line: usize, command: &'static str, expected: &'static str) -> ScriptError {
    ScriptError::WrongArity {
        line,
        command,
        expected,
    }
}

fn parse_number<T: FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse::<T>().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_skips_comments() {
        let script: Script = "
            # comment
            resize 640 480
            tool rectangle
            down 10 10   # press
            move 50.5 30
            up
        "
        .parse()
        .unwrap();

        assert_eq!(
            script.commands,
            vec![
                ScriptCommand::Resize {
                    width: 640,
                    height: 480
                },
                ScriptCommand::Tool(Tool::Rectangle),
                ScriptCommand::Pointer(PointerEvent::Down {
                    button: MouseButton::Left,
                    x: 10.0,
                    y: 10.0
                }),
                ScriptCommand::Pointer(PointerEvent::Move { x: 50.5, y: 30.0 }),
                ScriptCommand::Pointer(PointerEvent::Up {
                    button: MouseButton::Left,
                    x: 50.5,
                    y: 30.0
                }),
            ]
        );
    }

    #[test]
    fn up_accepts_explicit_position() {
        let script: Script = "up 3 4".parse().unwrap();
        assert_eq!(
            script.commands,
            vec![ScriptCommand::Pointer(PointerEvent::Up {
                button: MouseButton::Left,
                x: 3.0,
                y: 4.0
            })]
        );
    }

    #[test]
    fn negative_and_off_canvas_coordinates_are_accepted() {
        let script: Script = "down -20 99999.5".parse().unwrap();
        assert_eq!(script.commands.len(), 1);
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            "tool line\nscribble 1 2".parse::<Script>(),
            Err(ScriptError::UnknownCommand {
                line: 2,
                command: "scribble".into()
            })
        );
        assert_eq!(
            "\n\ndown 1".parse::<Script>(),
            Err(ScriptError::WrongArity {
                line: 3,
                command: "down",
                expected: "x and y coordinates"
            })
        );
        assert_eq!(
            "move one 2".parse::<Script>(),
            Err(ScriptError::InvalidNumber {
                line: 1,
                value: "one".into()
            })
        );
        assert!(matches!(
            "tool ellipse".parse::<Script>(),
            Err(ScriptError::InvalidTool { line: 1, .. })
        ));
        assert!(matches!(
            "resize -5 10".parse::<Script>(),
            Err(ScriptError::InvalidNumber { line: 1, .. })
        ));
    }
}
