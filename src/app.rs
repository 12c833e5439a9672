use std::io::{BufRead, Write};

use log::{info, warn};

use crate::config::Config;
use crate::data::loader::load_selection;
use crate::data::model::{
    day_name, parse_day_filter, parse_month_filter, City, Month, Selection, CITY_DATA, WEEKDAYS,
};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::state::{Session, SessionState};
use crate::ui::report::{write_reports, SEPARATOR};
use crate::ui::table::write_page;

// ---------------------------------------------------------------------------
// Interactive application
// ---------------------------------------------------------------------------

pub struct BikeshareApp {
    pub config: Config,
    pub session: Session,
}

impl BikeshareApp {
    pub fn new(config: Config) -> Self {
        let session = Session::new(config.page_size);
        BikeshareApp { config, session }
    }

    /// Drive the session until the user declines to restart or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        while self.session.state != SessionState::Terminated {
            match self.step(prompter) {
                Ok(()) => {}
                Err(Error::InputClosed) => {
                    info!("input closed, exiting");
                    self.session.terminate();
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Perform the work of the current state and move to the next one.
    fn step<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        let state = self.session.state;
        match state {
            SessionState::Prompting => {
                let selection = ask_selection(prompter)?;
                self.session.selected(selection);
            }
            SessionState::Loading(selection) => {
                match load_selection(&self.config.data_dir, &selection) {
                    Ok(table) => self.session.loaded(table),
                    Err(e) => {
                        warn!("loading {selection} failed: {e}");
                        writeln!(
                            prompter.output(),
                            "\nCould not load data for {}: {e}",
                            selection.city
                        )?;
                        self.session.load_failed();
                    }
                }
            }
            SessionState::Reporting => {
                let out = prompter.output();
                match &self.session.table {
                    Some(table) if !table.is_empty() => write_reports(out, table)?,
                    _ => {
                        writeln!(out, "\nNo data for this selection.")?;
                        writeln!(out, "{SEPARATOR}")?;
                    }
                }
                self.session.reported();
            }
            SessionState::RawDataPaging => {
                let n = self.session.page_size;
                let question = if self.session.at_first_page() {
                    format!("\nWould you like to see {n} rows of raw data? Enter yes or no: ")
                } else {
                    format!("\nWould you like to see {n} more rows of data? Enter yes or no: ")
                };
                if prompter.ask_yes(&question)? {
                    let columns = self
                        .session
                        .table
                        .as_ref()
                        .map(|t| t.columns.clone())
                        .unwrap_or_default();
                    let page = self.session.next_page();
                    write_page(prompter.output(), &columns, page)?;
                } else {
                    self.session.paging_done();
                }
            }
            SessionState::RestartDecision => {
                if prompter.ask_yes("\nWould you like to restart? Enter yes or no: ")? {
                    self.session.restart();
                } else {
                    self.session.terminate();
                }
            }
            SessionState::Terminated => {}
        }
        Ok(())
    }
}

/// Ask for city, month and day, re-prompting on invalid answers.
pub fn ask_selection<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Selection> {
    writeln!(prompter.output(), "Hello! Let's explore some US bikeshare data!")?;

    let cities: Vec<&str> = CITY_DATA.iter().map(|(key, _)| *key).collect();
    let city = prompter.ask_choice(
        &format!("Name of the city to analyze ({}): ", cities.join(", ")),
        "Please enter a city we have data for: ",
        &cities,
    )?;

    let mut months: Vec<&str> = Month::ALL.iter().map(|m| m.name()).collect();
    months.push("all");
    let month = prompter.ask_choice(
        &format!("Enter month ({}): ", months.join(", ")),
        "Please enter a valid month (january, february, ... , june, all): ",
        &months,
    )?;

    let mut days: Vec<String> = WEEKDAYS.iter().map(|d| day_name(*d).to_lowercase()).collect();
    days.push("all".to_string());
    let days: Vec<&str> = days.iter().map(String::as_str).collect();
    let day = prompter.ask_choice(
        &format!("Enter day ({}): ", days.join(", ")),
        "Please enter a valid day (monday, tuesday, ... , sunday, all): ",
        &days,
    )?;

    writeln!(prompter.output(), "{SEPARATOR}")?;
    Ok(Selection {
        city: City::from_key(&city)?,
        month: parse_month_filter(&month)?,
        day: parse_day_filter(&day)?,
    })
}
