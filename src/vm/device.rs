//! Output devices for the interpreter.
//!
//! All observable output of a program (the `push` literal echo and
//! `print`) goes through a [`Device`], which acts as the machine's
//! frontend to the world. The interpreter is generic over the device, so
//! tests run programs against a [`TestingDevice`] that captures every
//! line of output to check against the expected output, while the binary
//! uses the [`StandardDevice`] that writes to standard output.

use std::io::{stdout, Write};

/// Where interpreter output goes. `put` writes one line of text.
pub trait Device {
    /// Write one line of output.
    fn put(&mut self, text: &str) -> Result<(), String>;
}

/// A device that writes each line to standard output.
#[derive(Debug, Default)]
pub struct StandardDevice;

impl Device for StandardDevice {
    fn put(&mut self, text: &str) -> Result<(), String> {
        println!("{}", text);
        if stdout().flush().is_err() {
            Err(String::from("could not flush output"))
        } else {
            Ok(())
        }
    }
}

/// A device used for testing. This simply keeps every line the program
/// writes, so tests can check the captured output against the predicted
/// output.
#[derive(Clone, Debug, Default)]
pub struct TestingDevice {
    pub output: Vec<String>,
}

impl TestingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the output of the testing device as one string, with a
    /// newline after each written line.
    pub fn output_str(&self) -> String {
        let mut result = String::new();
        for line in &self.output {
            result.push_str(line);
            result.push('\n');
        }
        result
    }
}

impl Device for TestingDevice {
    fn put(&mut self, text: &str) -> Result<(), String> {
        self.output.push(text.to_string());
        Ok(())
    }
}
