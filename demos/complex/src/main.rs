use std::fmt;

use anyhow::Result;
use vessel_core::{State, Store, store};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Profile {
    name: String,
    count: u32,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.count)
    }
}

struct ProfileStore {
    state: Store<State<Profile>>,
}

impl ProfileStore {
    fn new(initial: Profile) -> Self {
        Self {
            state: store(State::new(initial)),
        }
    }

    fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        Ok(self.state.update(|s| {
            State::new(Profile {
                name,
                count: s.value().count,
            })
        })?)
    }

    fn set_count(&self, count: u32) -> Result<()> {
        Ok(self.state.update(|s| {
            State::new(Profile {
                name: s.value().name.clone(),
                count,
            })
        })?)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let profile = ProfileStore::new(Profile {
        name: "ricky".into(),
        count: 0,
    });

    println!("state: {}", profile.state.get().value()); // ricky - 0
    profile.set_name("Ricky Sanchez")?;
    println!("state: {}", profile.state.get().value()); // Ricky Sanchez - 0
    profile.set_count(64)?;
    println!("state: {}", profile.state.get().value()); // Ricky Sanchez - 64

    Ok(())
}
