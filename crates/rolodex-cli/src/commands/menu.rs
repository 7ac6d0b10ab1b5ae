use crate::console::{Console, Tone};
use crate::util::{contact_table, search_row};
use anyhow::Result;
use rolodex_core::CoreError;
use rolodex_store::error::{StoreError, StoreErrorKind};
use rolodex_store::{AddOutcome, ContactStore};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::warn;

const NOT_FOUND_MESSAGE: &str = "Hmmm, not the droid you're looking for...";

const DROID: &str = r#"         _____
       .'/L|__`.
      / =[_]O|` \
      |"+_____":|
    __:='|____`-:__
   ||[] ||====| []||
   ||[] | |=| | []||
   |:||_|=|U| |_||:|
   |:|||]_=_ =[_||:|
   | |||] [_][]C|| |
   | ||-'"""""`-|| |
   /|\\_\_|_|_/_//|\
  |___|   /|\   |___|
  `---'  |___|  `---'
         `---'
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    View,
    Add,
    Search,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::View),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Runs the interactive menu until the user exits or input ends, then
/// writes the contacts file one last time.
pub fn run<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
    banner: Option<&str>,
) -> Result<()> {
    if let Some(banner) = banner {
        console.say(banner)?;
    }

    loop {
        let Some(choice) = read_choice(console)? else {
            break;
        };
        let flow = match choice {
            MenuChoice::View => show_contacts(store, console)?,
            MenuChoice::Add => add_contact(store, console)?,
            MenuChoice::Search => search_contact(store, console)?,
            MenuChoice::Delete => delete_contact(store, console)?,
            MenuChoice::Exit => Flow::Quit,
        };
        if matches!(flow, Flow::Quit) {
            break;
        }
    }

    if let Err(err) = store.save() {
        report_save_failure(console, &err)?;
    }
    console.flush()?;
    Ok(())
}

fn read_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<MenuChoice>> {
    loop {
        console.say("")?;
        console.say("--- Contacts Manager ---")?;
        console.say("1. View All Contacts")?;
        let add = console.paint("Add", Tone::Success);
        console.say(format!("2. {} New Contact", add))?;
        console.say("3. Search Contact by Name")?;
        let delete = console.paint("Delete", Tone::Danger);
        console.say(format!("4. {} an existing contact", delete))?;
        let exit = console.paint("Exit", Tone::Alert);
        console.say(format!("5. {}", exit))?;

        let Some(answer) = console.prompt("Enter an option (1, 2, 3, 4 or 5):")? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(choice) => return Ok(Some(choice)),
            Err(()) => console.say("Invalid input. Please enter a number between 1 and 5.")?,
        }
    }
}

fn show_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    for line in contact_table(store.contacts()) {
        console.say(line)?;
    }
    Ok(Flow::Continue)
}

fn add_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    loop {
        let Some(name) = console.prompt("Enter name:")? else {
            return Ok(Flow::Quit);
        };
        let Some(phone) = console.prompt("Enter phone number:")? else {
            return Ok(Flow::Quit);
        };

        let mut prompt_error = None;
        let result = store.add(&name, &phone, |existing| {
            let question = format!(
                "Negative Ghost Rider, {} is already in your contacts. Do you want to overwrite it? (Yes/No)",
                existing.name
            );
            console.confirm(&question).unwrap_or_else(|err| {
                prompt_error = Some(err);
                false
            })
        });
        if let Some(err) = prompt_error {
            return Err(err.into());
        }

        match result {
            Ok(AddOutcome::Added(_)) => console.say_toned("Contact added.", Tone::Success)?,
            Ok(AddOutcome::Updated { .. }) => console.say("Contact updated.")?,
            Ok(AddOutcome::Kept(_)) => console.say("Contact not updated.")?,
            Err(StoreError::Core(CoreError::InvalidPhoneNumber(_))) => {
                console.say("Invalid phone number. Please enter a 7 or 10 digit number.")?;
                continue;
            }
            Err(StoreError::Core(CoreError::EmptyName)) => {
                console.say("Name cannot be empty.")?;
                continue;
            }
            Err(StoreError::Core(CoreError::InvalidName(_))) => {
                console.say("Names cannot contain '|' or line breaks.")?;
                continue;
            }
            Err(err) if err.kind() == StoreErrorKind::Save => report_save_failure(console, &err)?,
            Err(err) => return Err(err.into()),
        }
        return Ok(Flow::Continue);
    }
}

fn search_contact<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let Some(name) = console.prompt("Enter the name of the contact to search:")? else {
        return Ok(Flow::Quit);
    };
    match store.search(&name) {
        Some(contact) => console.say(search_row(contact))?,
        None => console.say(NOT_FOUND_MESSAGE)?,
    }
    Ok(Flow::Continue)
}

fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let delete = console.paint("Delete", Tone::Danger);
    console.say("")?;
    console.say(format!("--- {} Contact? ---", delete))?;
    let Some(name) = console.prompt(&format!("Enter name to {}:", delete))? else {
        return Ok(Flow::Quit);
    };

    let question = format!(
        "Are you sure you want to {} {}? (Yes/No)",
        delete,
        name.trim()
    );
    if !console.confirm(&question)? {
        console.say_toned("Deletion cancelled.", Tone::Danger)?;
        return Ok(Flow::Continue);
    }

    match store.delete(&name) {
        Ok(_) => console.say("Bye Felicia.")?,
        Err(err) => match err.kind() {
            StoreErrorKind::NotFound => {
                console.say(NOT_FOUND_MESSAGE)?;
                console.say(DROID)?;
            }
            StoreErrorKind::Save => {
                console.say("Bye Felicia.")?;
                report_save_failure(console, &err)?;
            }
            _ => return Err(err.into()),
        },
    }
    Ok(Flow::Continue)
}

fn report_save_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &StoreError,
) -> io::Result<()> {
    warn!(error = %err, "could not save contacts");
    console.say_toned("Could not save contacts.", Tone::Danger)
}
