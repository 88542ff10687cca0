//! Session controller
//!
//! Drives the menus, collects input and prints responses.

use std::io::{BufRead, ErrorKind, Write};

use tracing::{debug, info};

use crate::engine::Engine;
use crate::error::{Result, StoreError};
use crate::protocol::{Command, Response};
use crate::query::SortDirection;
use crate::record::{Country, Field, NumericField};
use crate::validate::{normalize_text, prompt_line, prompt_positive_integer};

use super::display::Renderer;
use super::menu::{FilterMenu, MainMenu, Menu, SortMenu, StatsMenu};

/// Whether the main loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive session over one engine
///
/// No error ends the session except closed input: every other error is
/// printed and control returns to the menu.
pub struct Session<'e, R, W> {
    engine: &'e mut Engine,
    input: R,
    output: W,
    renderer: Renderer,
}

impl<'e, R: BufRead, W: Write> Session<'e, R, W> {
    pub fn new(engine: &'e mut Engine, input: R, output: W) -> Self {
        let renderer = Renderer::from_config(engine.config());
        Self {
            engine,
            input,
            output,
            renderer,
        }
    }

    /// Run the main menu until the user exits or input ends
    ///
    /// Closed input is treated like the exit option: the store is saved once
    /// more before returning.
    pub fn run(&mut self) -> Result<()> {
        self.print_load_summary()?;

        loop {
            match self.main_menu_step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) if is_end_of_input(&err) => {
                    info!("input closed, saving and leaving");
                    let response = self.engine.execute(Command::Quit)?;
                    self.print(&response)?;
                    return Ok(());
                }
                Err(err) => writeln!(self.output, "** {} **", err)?,
            }
        }
    }

    /// Give back the output (used by tests to inspect the transcript)
    pub fn into_output(self) -> W {
        self.output
    }

    // =========================================================================
    // Main menu
    // =========================================================================

    fn main_menu_step(&mut self) -> Result<Flow> {
        let choice = self.choose::<MainMenu>()?;
        debug!(?choice, "main menu choice");

        match choice {
            Some(MainMenu::Add) => self.add_country()?,
            Some(MainMenu::Update) => self.update_country()?,
            Some(MainMenu::Search) => self.search_country()?,
            Some(MainMenu::Filter) => self.filter_menu()?,
            Some(MainMenu::Sort) => self.sort_menu()?,
            Some(MainMenu::Stats) => self.stats_menu()?,
            Some(MainMenu::List) => {
                writeln!(self.output, "\n ALL COUNTRIES")?;
                let table = self.renderer.table(self.engine.store().records());
                write!(self.output, "{}", table)?;
            }
            Some(MainMenu::Exit) => {
                writeln!(self.output, "\n Saving data and leaving...")?;
                let response = self.engine.execute(Command::Quit)?;
                self.print(&response)?;
                return Ok(Flow::Exit);
            }
            None => writeln!(self.output, " Invalid option. Try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn add_country(&mut self) -> Result<()> {
        writeln!(self.output, "\n ADD NEW COUNTRY")?;

        let name = loop {
            let name = normalize_text(&self.ask(" Country name: ")?);
            if name.is_empty() {
                writeln!(self.output, "** The country name cannot be empty. **")?;
                continue;
            }
            if self.engine.store().find(&name).is_some() {
                writeln!(self.output, "** Country '{}' already exists. **", name)?;
                continue;
            }
            break name;
        };

        let population = prompt_positive_integer(&mut self.input, &mut self.output, " Population: ")?;
        let area = prompt_positive_integer(&mut self.input, &mut self.output, " Area (km²): ")?;

        let continent = loop {
            let continent = normalize_text(&self.ask(" Continent: ")?);
            if continent.is_empty() {
                writeln!(self.output, "** The continent cannot be empty. **")?;
                continue;
            }
            break continent;
        };

        let country = Country::new(name, population, area, continent)?;
        self.run_command(Command::Add { country })
    }

    fn update_country(&mut self) -> Result<()> {
        self.require_records("update")?;
        writeln!(self.output, "\n UPDATE DATA")?;

        let name = normalize_text(&self.ask(" Exact country name: ")?);
        if self.engine.store().find(&name).is_none() {
            return Err(StoreError::NotFound(name));
        }
        writeln!(self.output, "\n Country found: {}.", name)?;

        let population = self.ask("New population (Enter to keep): ")?;
        let area = self.ask(" New area (km²) (Enter to keep): ")?;

        self.run_command(Command::Update {
            name,
            population: non_empty(population),
            area: non_empty(area),
        })
    }

    fn search_country(&mut self) -> Result<()> {
        self.require_records("search")?;

        let query = self.ask(" Name (or part of the name) to search: ")?;
        match self.engine.execute(Command::Search { query: query.clone() })? {
            Response::Countries(found) if found.is_empty() => {
                writeln!(self.output, "\n No results for '{}'.", normalize_text(&query))?;
            }
            response => self.print(&response)?,
        }
        Ok(())
    }

    // =========================================================================
    // Filter submenu
    // =========================================================================

    fn filter_menu(&mut self) -> Result<()> {
        self.require_records("filter")?;

        loop {
            let step = match self.choose::<FilterMenu>()? {
                Some(FilterMenu::Continent) => self.filter_continent(),
                Some(FilterMenu::PopulationRange) => self.filter_range(NumericField::Population),
                Some(FilterMenu::AreaRange) => self.filter_range(NumericField::Area),
                Some(FilterMenu::Back) => return Ok(()),
                None => {
                    writeln!(self.output, " Invalid option. Try again.")?;
                    Ok(())
                }
            };
            self.recover(step)?;
        }
    }

    fn filter_continent(&mut self) -> Result<()> {
        let continents = self.engine.execute(Command::Continents)?;
        self.print(&continents)?;

        let continent = normalize_text(&self.ask(" Continent to filter (must match one above): ")?);
        if continent.is_empty() {
            writeln!(self.output, " The continent name cannot be empty.")?;
            return Ok(());
        }

        match self.engine.execute(Command::FilterContinent { continent: continent.clone() })? {
            Response::Countries(found) if found.is_empty() => writeln!(
                self.output,
                "\n** No countries found in continent '{}'. **",
                continent
            )?,
            response => self.print(&response)?,
        }
        Ok(())
    }

    fn filter_range(&mut self, field: NumericField) -> Result<()> {
        writeln!(self.output, " FILTER BY {} RANGE", field.label().to_uppercase())?;

        let min = prompt_positive_integer(&mut self.input, &mut self.output, " Minimum: ")?;
        let max = loop {
            let max = prompt_positive_integer(&mut self.input, &mut self.output, " Maximum: ")?;
            if max < min {
                writeln!(self.output, " The maximum cannot be lower than the minimum.")?;
                continue;
            }
            break max;
        };

        match self.engine.execute(Command::FilterRange { field, min, max })? {
            Response::Countries(found) if found.is_empty() => writeln!(
                self.output,
                "\n** No results for the requested {} range. **",
                field
            )?,
            response => self.print(&response)?,
        }
        Ok(())
    }

    // =========================================================================
    // Sort submenu
    // =========================================================================

    fn sort_menu(&mut self) -> Result<()> {
        self.require_records("sort")?;

        loop {
            let field = match self.choose::<SortMenu>()? {
                Some(SortMenu::Name) => Field::Name,
                Some(SortMenu::Population) => Field::Population,
                Some(SortMenu::Area) => Field::Area,
                Some(SortMenu::Back) => return Ok(()),
                None => {
                    writeln!(self.output, "** Invalid sort option. **")?;
                    continue;
                }
            };

            let direction = self.ask_direction()?;
            let step = self.run_command(Command::Sort { field, direction });
            self.recover(step)?;
        }
    }

    fn ask_direction(&mut self) -> Result<SortDirection> {
        loop {
            let answer = self.ask(" Ascending (A) or descending (D)?: ")?.to_lowercase();
            match answer.as_str() {
                "a" => return Ok(SortDirection::Ascending),
                "d" => return Ok(SortDirection::Descending),
                _ => writeln!(self.output, "** Invalid order. Use 'A' or 'D'. **")?,
            }
        }
    }

    // =========================================================================
    // Statistics submenu
    // =========================================================================

    fn stats_menu(&mut self) -> Result<()> {
        self.require_records("show statistics")?;

        loop {
            let command = match self.choose::<StatsMenu>()? {
                Some(StatsMenu::Extremes) => Command::Extremes,
                Some(StatsMenu::AveragePopulation) => Command::Average {
                    field: NumericField::Population,
                },
                Some(StatsMenu::AverageArea) => Command::Average {
                    field: NumericField::Area,
                },
                Some(StatsMenu::CountByContinent) => Command::CountByContinent,
                Some(StatsMenu::Back) => return Ok(()),
                None => {
                    writeln!(self.output, " Invalid option. Try again.")?;
                    continue;
                }
            };

            let step = self.run_command(command);
            self.recover(step)?;
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn print_load_summary(&mut self) -> Result<()> {
        let report = self.engine.load_report();
        let path = self.engine.store().path().display().to_string();

        if report.created {
            writeln!(
                self.output,
                " Data file '{}' not found. Created an empty one with a header.",
                path
            )?;
        } else {
            writeln!(self.output, "\n Load finished. {} countries loaded.", report.accepted)?;
            if report.ignored > 0 {
                writeln!(
                    self.output,
                    " Warning: {} rows ignored (bad format or incomplete data).",
                    report.ignored
                )?;
            }
        }
        Ok(())
    }

    /// Show a menu and read one choice; `None` for an unknown choice
    fn choose<M: Menu>(&mut self) -> Result<Option<M>> {
        write!(self.output, "{}", M::render())?;
        let choice = self.ask(" Choose an option: ")?;
        Ok(M::parse(&choice))
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        prompt_line(&mut self.input, &mut self.output, label)
    }

    fn run_command(&mut self, command: Command) -> Result<()> {
        let response = self.engine.execute(command)?;
        self.print(&response)
    }

    fn print(&mut self, response: &Response) -> Result<()> {
        let text = self.renderer.render(response);
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn require_records(&self, action: &str) -> Result<()> {
        if self.engine.store().is_empty() {
            return Err(StoreError::EmptyCollection(action.to_string()));
        }
        Ok(())
    }

    /// Print a submenu error and stay in the submenu; closed input still ends
    fn recover(&mut self, step: Result<()>) -> Result<()> {
        match step {
            Err(err) if !is_end_of_input(&err) => {
                writeln!(self.output, "** {} **", err)?;
                Ok(())
            }
            other => other,
        }
    }
}

fn is_end_of_input(err: &StoreError) -> bool {
    matches!(err, StoreError::Io(io) if io.kind() == ErrorKind::UnexpectedEof)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
