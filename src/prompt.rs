use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::formula::VALID_FORMULAS;
use crate::tour::{Point, TourRequest};

/// Reads whitespace separated answers from `input`, writing each question to
/// `output` first. Answers may be spread over lines or packed onto one.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn token(&mut self) -> Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow!("unexpected end of input"));
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.token()
    }

    pub fn ask_parsed<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let answer = self.ask(question)?;
        answer
            .parse()
            .with_context(|| format!("{:?} is not a valid answer to {:?}", answer, question.trim()))
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Asks for the point count, each point, the radius and the formula.
    pub fn request(&mut self) -> Result<TourRequest> {
        let num_points: usize = self.ask_parsed("Enter the number of points: ")?;

        self.say(&format!(
            "Enter the latitudes and longitudes of the {} points:",
            num_points
        ))?;
        // The count is only a claim until the points arrive.
        let mut points = Vec::with_capacity(num_points.min(1024));
        for i in 0..num_points {
            self.say(&format!("Point {}:", i + 1))?;
            let latitude = self.ask_parsed("Latitude: ")?;
            let longitude = self.ask_parsed("Longitude: ")?;
            points.push(Point::new(latitude, longitude));
        }

        let radius = self.ask_parsed("Enter the Earth's radius: ")?;
        let formula = self.ask(&format!(
            "Enter the formula to use ({}): ",
            VALID_FORMULAS.join(" or ")
        ))?;

        Ok(TourRequest {
            points,
            radius,
            formula,
        })
    }
}
