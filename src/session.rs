//! The interactive menu loop.
//!
//! Each menu action reads its own sets and cardinalities from scratch and
//! drops them when it's done, so a failed action can't affect a later one.
//! Recoverable errors are reported, the rest of the offending line is thrown
//! away, and the menu comes back. End of input ends the session.
use std::io::{BufRead, Write};

use crate::calculate::{inclusion_exclusion_with, Evaluation};
use crate::cardinality::{approximate_intersection, derive_cardinalities, CardinalityMap, IntSet};
use crate::error::PieError;
use crate::input::Scanner;
use crate::operations::{complement, difference, format_set, intersection, union};
use crate::report::Reporter;
use crate::subsets::{generate_subsets, subset_key, validate_set_names, MAX_SETS};

/// The predefined library data: students borrowing books of each subject
pub const LIBRARY_NAMES: [&str; 3] = ["Maths", "Science", "Literature"];
const LIBRARY_COUNTS: [u64; 7] = [50, 45, 12, 30, 8, 6, 4];

/// The genres of the movie example
pub const MOVIE_NAMES: [&str; 3] = ["Action", "Comedy", "Drama"];

const MAIN_TITLE: &str = "========== PIE Calculator & Set Tool ==========";
const MAIN_MENU: [&str; 6] = [
    "Dynamic PIE (numbers)",
    "PIE with Real Sets",
    "Library Example",
    "Movie Example",
    "Set Operations",
    "Exit",
];
const SET_MENU: [&str; 5] = ["Union", "Intersection", "Difference", "Complement", "Exit"];

/// A main menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Dynamic,
    RealSets,
    Library,
    Movie,
    SetOperations,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => MenuChoice::Dynamic,
            2 => MenuChoice::RealSets,
            3 => MenuChoice::Library,
            4 => MenuChoice::Movie,
            5 => MenuChoice::SetOperations,
            6 => MenuChoice::Exit,
            _ => return None,
        })
    }
}

/// A set operation submenu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetChoice {
    Union,
    Intersection,
    Difference,
    Complement,
    Exit,
}

impl SetChoice {
    fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => SetChoice::Union,
            2 => SetChoice::Intersection,
            3 => SetChoice::Difference,
            4 => SetChoice::Complement,
            5 => SetChoice::Exit,
            _ => return None,
        })
    }
}

/// How the intersections of a numeric example get their sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intersections {
    /// Ask for each one, prompting `Enter size of K: `
    Ask,
    /// Ask for each one, prompting with the bare key (the movie example)
    AskByKey,
    /// Use `approximate_intersection`
    Approximate,
}

/// Whether the loop that got an error should keep going
enum Next {
    Continue,
    Stop,
}

/// An interactive session reading from `R` and writing to `W`.
pub struct Session<R: BufRead, W: Write> {
    input: Scanner<R>,
    out: Reporter<W>,
    separator: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// A session joining combination keys with `separator`
    pub fn new(input: Scanner<R>, out: Reporter<W>, separator: impl Into<String>) -> Self {
        Session { input, out, separator: separator.into() }
    }

    /// Gives back the reporter, and with it the output
    pub fn into_reporter(self) -> Reporter<W> {
        self.out
    }

    /// Runs the main menu until the user picks Exit or the input runs out.
    /// Only I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<(), PieError> {
        loop {
            self.out.menu(MAIN_TITLE, &MAIN_MENU, "Choice: ")?;
            let result = match self.menu_choice() {
                Ok(Some(MenuChoice::Exit)) => {
                    self.out.line("Exiting...")?;
                    return Ok(());
                }
                Ok(Some(choice)) => self.perform(choice),
                Ok(None) => self.out.warning("Invalid choice!").map_err(PieError::from),
                Err(e) => Err(e),
            };
            if let Next::Stop = self.recover(result)? {
                return Ok(());
            }
        }
    }

    fn menu_choice(&mut self) -> Result<Option<MenuChoice>, PieError> {
        let n = self.input.next_value::<i64>("a menu choice")?;
        Ok(MenuChoice::from_number(n))
    }

    /// Reports a recoverable error and says whether to go on. `Io` errors are
    /// passed up.
    fn recover(&mut self, result: Result<(), PieError>) -> Result<Next, PieError> {
        match result {
            Ok(()) => Ok(Next::Continue),
            Err(PieError::EndOfInput(what)) => {
                log::info!("input ended while reading {what}");
                Ok(Next::Stop)
            }
            Err(e) if e.is_recoverable() => {
                log::debug!("recovering from: {e}");
                self.input.discard_line();
                self.out.warning(format!("Error: {e}"))?;
                Ok(Next::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn perform(&mut self, choice: MenuChoice) -> Result<(), PieError> {
        match choice {
            MenuChoice::Dynamic => self.dynamic_pie(),
            MenuChoice::RealSets => self.set_based_pie(),
            MenuChoice::Library => self.library_example(),
            MenuChoice::Movie => self.movie_example(),
            MenuChoice::SetOperations => self.set_operations(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Evaluates the predefined library example (total 103).
    pub fn library_example(&mut self) -> Result<(), PieError> {
        self.out.title("################ Example 1: Library Problem ################")?;
        self.out.line("Students borrowing Maths, Science, and Literature books.")?;
        let mut data = CardinalityMap::new();
        for (subset, count) in generate_subsets(LIBRARY_NAMES.len())?.iter().zip(LIBRARY_COUNTS) {
            data.insert(subset_key(subset, &LIBRARY_NAMES, &self.separator), count);
        }
        self.evaluate(&data, &LIBRARY_NAMES)?;
        Ok(())
    }

    fn movie_example(&mut self) -> Result<(), PieError> {
        self.out.title("################ Example 2: Movie Preferences ################")?;
        self.out.line("Enter number of students who like each genre:")?;
        let data = self.read_cardinalities(&MOVIE_NAMES, Intersections::AskByKey)?;
        self.evaluate(&data, &MOVIE_NAMES)?;
        Ok(())
    }

    fn dynamic_pie(&mut self) -> Result<(), PieError> {
        let count = self.read_set_count()?;
        let mut names = Vec::with_capacity(count);
        for i in 1..=count {
            self.out.prompt(format!("Enter name of set {i}: "))?;
            names.push(self.input.next_line("a set name")?);
        }
        validate_set_names(&names, &self.separator)?;

        // Sizes are read before the question, so the approximation has them
        let mut data = CardinalityMap::new();
        for name in &names {
            self.out.prompt(format!("Enter size of {name}: "))?;
            data.insert(name.as_str(), self.input.next_value::<u64>("a set size")?);
        }
        self.out.prompt("Do you want to enter intersections manually? (yes/no): ")?;
        let answer = self.input.next_word("yes or no")?;
        let how = if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") {
            self.out.line("Now enter intersections (if not applicable, enter 0):")?;
            Intersections::Ask
        } else {
            self.out.note("Program will auto-calculate approximate intersections:")?;
            Intersections::Approximate
        };
        self.read_intersections(&names, &mut data, how)?;
        self.evaluate(&data, &names)?;
        Ok(())
    }

    fn set_based_pie(&mut self) -> Result<(), PieError> {
        let sets = self.read_sets()?;
        let data = derive_cardinalities(&sets, &self.separator)?;
        let names: Vec<&str> = sets.iter().map(|(name, _)| name.as_str()).collect();
        self.evaluate(&data, &names)?;
        Ok(())
    }

    fn set_operations(&mut self) -> Result<(), PieError> {
        let named = self.read_sets()?;
        let sets: Vec<IntSet> = named.into_iter().map(|(_, set)| set).collect();
        loop {
            self.out.menu("Choose Set Operation:", &SET_MENU, "Choice: ")?;
            let result = match self.input.next_value::<i64>("a set operation") {
                Ok(n) => match SetChoice::from_number(n) {
                    Some(SetChoice::Exit) => return Ok(()),
                    Some(choice) => self.set_operation(&sets, choice),
                    None => self.out.warning("Invalid choice!").map_err(PieError::from),
                },
                Err(e) => Err(e),
            };
            // An exhausted input has to end the whole session, not just the submenu
            if matches!(result, Err(PieError::EndOfInput(_))) {
                return result;
            }
            if let Next::Stop = self.recover(result)? {
                return Ok(());
            }
        }
    }

    fn set_operation(&mut self, sets: &[IntSet], choice: SetChoice) -> Result<(), PieError> {
        match choice {
            SetChoice::Union => self.out.line(format!("Union = {}", format_set(&union(sets))))?,
            SetChoice::Intersection => {
                self.out.line(format!("Intersection = {}", format_set(&intersection(sets))))?;
            }
            SetChoice::Difference => {
                let a = self.read_set_number("Choose first set", sets.len())?;
                let b = self.read_set_number("Choose second set", sets.len())?;
                let result = difference(sets, a, b)?;
                self.out.line(format!("Difference = {}", format_set(&result)))?;
            }
            SetChoice::Complement => {
                let a = self.read_set_number("Choose set index", sets.len())?;
                let result = complement(sets, a)?;
                self.out.line(format!("Complement = {}", format_set(&result)))?;
            }
            SetChoice::Exit => {}
        }
        Ok(())
    }

    /// Prompts with `what (1-n): ` and returns the 0-based index chosen.
    fn read_set_number(&mut self, what: &str, count: usize) -> Result<usize, PieError> {
        self.out.prompt(format!("{what} (1-{count}): "))?;
        let expected = format!("a set number from 1 to {count}");
        let number = self.input.next_value::<usize>(&expected)?;
        if number == 0 || number > count {
            return Err(PieError::InvalidInput { expected, found: number.to_string() });
        }
        Ok(number - 1)
    }

    fn read_set_count(&mut self) -> Result<usize, PieError> {
        self.out.prompt("Enter number of sets: ")?;
        let count = self.input.next_value::<usize>("the number of sets")?;
        self.input.discard_line();
        match count {
            0 => Err(PieError::NoSets),
            n if n > MAX_SETS => Err(PieError::TooManySets { requested: n, max: MAX_SETS }),
            n => Ok(n),
        }
    }

    /// Reads a count, then for each set a name, a size, and that many
    /// integers. Names are only labels here; `derive_cardinalities` checks
    /// them when they're about to become combination keys.
    fn read_sets(&mut self) -> Result<Vec<(String, IntSet)>, PieError> {
        let count = self.read_set_count()?;
        let mut sets = Vec::with_capacity(count);
        for i in 1..=count {
            self.out.prompt(format!("Enter name of set {i}: "))?;
            let name = self.input.next_line("a set name")?;
            self.out.prompt(format!("Enter number of elements in {name}: "))?;
            let size = self.input.next_value::<usize>("a number of elements")?;
            if size > 0 {
                self.out.prompt("Enter elements: ")?;
            }
            let mut elements = IntSet::default();
            for _ in 0..size {
                elements.insert(self.input.next_value::<i64>("an integer element")?);
            }
            self.input.discard_line();
            sets.push((name, elements));
        }
        Ok(sets)
    }

    /// Asks for the size of every base set, then fills in the intersections.
    fn read_cardinalities(
        &mut self,
        names: &[&str],
        how: Intersections,
    ) -> Result<CardinalityMap, PieError> {
        let mut data = CardinalityMap::new();
        for &name in names {
            self.out.prompt(format!("{name}: "))?;
            data.insert(name, self.input.next_value::<u64>("a set size")?);
        }
        if how != Intersections::Approximate {
            self.out.line("Now enter the intersections:")?;
        }
        self.read_intersections(names, &mut data, how)?;
        Ok(data)
    }

    /// Adds a size for every subset of two or more sets, in enumeration
    /// order.
    fn read_intersections<S: AsRef<str>>(
        &mut self,
        names: &[S],
        data: &mut CardinalityMap,
        how: Intersections,
    ) -> Result<(), PieError> {
        for subset in generate_subsets(names.len())? {
            if subset.len() < 2 {
                continue;
            }
            let key = subset_key(&subset, names, &self.separator);
            let size = match how {
                Intersections::Ask => {
                    self.out.prompt(format!("Enter size of {key}: "))?;
                    self.input.next_value::<u64>("an intersection size")?
                }
                Intersections::AskByKey => {
                    self.out.prompt(format!("{key}: "))?;
                    self.input.next_value::<u64>("an intersection size")?
                }
                Intersections::Approximate => {
                    let approx = approximate_intersection(&subset, names, data);
                    self.out.note(format!("Approximating size of {key} as {approx}"))?;
                    approx
                }
            };
            data.insert(key, size);
        }
        Ok(())
    }

    /// Runs the evaluator, streaming each step to the reporter.
    fn evaluate<S: AsRef<str>>(
        &mut self,
        data: &CardinalityMap,
        names: &[S],
    ) -> Result<Evaluation, PieError> {
        self.out.evaluation_header(names)?;
        let out = &mut self.out;
        let result = inclusion_exclusion_with(data, names, &self.separator, |step| out.step(step))?;
        self.out.evaluation(&result)?;
        Ok(result)
    }
}
