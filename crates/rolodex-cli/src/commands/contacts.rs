use crate::commands::{print_json, Context};
use crate::error::{duplicate_name, invalid_input, not_found};
use crate::util::{contact_table, search_row};
use anyhow::Result;
use clap::{ArgAction, Args};
use rolodex_core::Contact;
use rolodex_store::AddOutcome;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    /// Replace the number of an existing contact with the same name
    #[arg(long, action = ArgAction::SetTrue)]
    pub overwrite: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

#[derive(Debug, Serialize)]
struct AddReport<'a> {
    status: &'static str,
    contact: &'a Contact,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_phone: Option<&'a str>,
}

pub fn list_contacts(ctx: &Context<'_>) -> Result<()> {
    let contacts = ctx.store.contacts();
    if ctx.json {
        return print_json(contacts);
    }

    if contacts.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for line in contact_table(contacts) {
        println!("{}", line);
    }
    Ok(())
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let overwrite = args.overwrite;
    let outcome = ctx.store.add(&args.name, &args.phone, |_| overwrite)?;

    let report = match &outcome {
        AddOutcome::Added(contact) => AddReport {
            status: "added",
            contact,
            previous_phone: None,
        },
        AddOutcome::Updated {
            contact,
            previous_phone,
        } => AddReport {
            status: "updated",
            contact,
            previous_phone: Some(previous_phone.as_str()),
        },
        AddOutcome::Kept(contact) => return Err(duplicate_name(contact.name.clone())),
    };

    if ctx.json {
        return print_json(&report);
    }
    match report.previous_phone {
        Some(previous) => println!(
            "{} {} {} (was {})",
            report.status, report.contact.name, report.contact.phone, previous
        ),
        None => println!(
            "{} {} {}",
            report.status, report.contact.name, report.contact.phone
        ),
    }
    Ok(())
}

pub fn search_contact(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(invalid_input("name cannot be empty"));
    }
    let contact = ctx
        .store
        .search(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name.trim())))?;

    if ctx.json {
        return print_json(contact);
    }
    println!("{}", search_row(contact));
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let removed = ctx.store.delete(&args.name)?;
    if ctx.json {
        return print_json(&removed);
    }
    println!("deleted {}", removed.name);
    Ok(())
}
