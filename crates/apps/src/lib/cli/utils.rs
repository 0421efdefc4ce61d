//! Command line interface utilities
use std::fmt::Debug;
use std::io::Write;
use std::marker::PhantomData;
use std::str::FromStr;

use clap::{ArgAction, ArgMatches};
use color_eyre::eyre::Result;

use super::args;
use super::context::Context;

// We only use static strings
pub type App = clap::Command;
pub type ClapArg = clap::Arg;

pub trait Cmd: Sized {
    fn add_sub(app: App) -> App;
    fn parse(matches: &ArgMatches) -> Option<Self>;

    fn parse_or_print_help(app: App) -> Result<(Self, Context)> {
        let mut app = Self::add_sub(app);
        let matches = app.clone().get_matches();
        match Self::parse(&matches) {
            Some(cmd) => {
                let global_args = args::Global::parse(&matches);
                let context = Context::new(global_args)?;
                Ok((cmd, context))
            }
            None => {
                app.print_help().unwrap();
                safe_exit(2);
            }
        }
    }
}

pub trait SubCmd: Sized {
    const CMD: &'static str;

    fn parse(matches: &ArgMatches) -> Option<Self>;
    fn def() -> App;
}

pub trait Args {
    fn parse(matches: &ArgMatches) -> Self;
    fn def(app: App) -> App;
}

pub trait AppExt {
    fn add_args<T: Args>(self) -> Self;
}

impl AppExt for App {
    fn add_args<T: Args>(self) -> Self {
        T::def(self)
    }
}

pub struct DefaultFn<T>(pub fn() -> T);

impl<T> Clone for DefaultFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for DefaultFn<T> {}

#[derive(Clone, Copy)]
pub struct Arg<T> {
    pub name: &'static str,
    pub r#type: PhantomData<T>,
}

#[derive(Clone, Copy)]
pub struct ArgOpt<T> {
    pub name: &'static str,
    pub r#type: PhantomData<T>,
}

#[derive(Clone, Copy)]
pub struct ArgDefault<T> {
    pub name: &'static str,
    pub default: DefaultFn<T>,
    pub r#type: PhantomData<T>,
}

#[derive(Clone, Copy)]
pub struct ArgFlag {
    pub name: &'static str,
}

pub const fn arg<T>(name: &'static str) -> Arg<T> {
    Arg {
        name,
        r#type: PhantomData,
    }
}

pub const fn arg_opt<T>(name: &'static str) -> ArgOpt<T> {
    ArgOpt {
        name,
        r#type: PhantomData,
    }
}

pub const fn arg_default<T>(
    name: &'static str,
    default: DefaultFn<T>,
) -> ArgDefault<T> {
    ArgDefault {
        name,
        default,
        r#type: PhantomData,
    }
}

pub const fn flag(name: &'static str) -> ArgFlag {
    ArgFlag { name }
}

impl<T> Arg<T>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    pub fn def(&self) -> ClapArg {
        ClapArg::new(self.name)
            .long(self.name)
            .num_args(1)
            .required(true)
    }

    pub fn parse(&self, matches: &ArgMatches) -> T {
        let raw = matches
            .get_one::<String>(self.name)
            .expect("The required argument should be present");
        T::from_str(raw).unwrap_or_else(|e| {
            eprintln!("Invalid {} argument: {:?}", self.name, e);
            safe_exit(1)
        })
    }
}

impl<T> ArgOpt<T>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    pub fn def(&self) -> ClapArg {
        ClapArg::new(self.name).long(self.name).num_args(1)
    }

    pub fn parse(&self, matches: &ArgMatches) -> Option<T> {
        let raw = matches.get_one::<String>(self.name)?;
        Some(T::from_str(raw).unwrap_or_else(|e| {
            eprintln!("Invalid {} argument: {:?}", self.name, e);
            safe_exit(1)
        }))
    }
}

impl<T> ArgDefault<T>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    pub fn def(&self) -> ClapArg {
        ClapArg::new(self.name).long(self.name).num_args(1)
    }

    pub fn parse(&self, matches: &ArgMatches) -> T {
        let DefaultFn(default) = self.default;
        matches
            .get_one::<String>(self.name)
            .map(|raw| {
                T::from_str(raw).unwrap_or_else(|e| {
                    eprintln!("Invalid {} argument: {:?}", self.name, e);
                    safe_exit(1)
                })
            })
            .unwrap_or_else(default)
    }
}

impl ArgFlag {
    pub fn def(&self) -> ClapArg {
        ClapArg::new(self.name)
            .long(self.name)
            .action(ArgAction::SetTrue)
    }

    pub fn parse(&self, matches: &ArgMatches) -> bool {
        matches.get_flag(self.name)
    }
}

/// Flush pending output and exit the process with the given code.
pub fn safe_exit(code: i32) -> ! {
    let _ = std::io::stdout().lock().flush();
    let _ = std::io::stderr().lock().flush();
    std::process::exit(code)
}
