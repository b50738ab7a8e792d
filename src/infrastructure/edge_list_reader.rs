use crate::domain::graph::Graph;
use anyhow::{anyhow, Context, Result};
use tokio::fs;
use tokio::io::{self, AsyncReadExt};

/// Parsed relations with vertices translated to 0-based indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationsInput {
    pub people: usize,
    pub relations: Vec<(usize, usize)>,
}

impl RelationsInput {
    pub fn to_graph(&self) -> Result<Graph> {
        Graph::from_edges(self.people, &self.relations)
    }
}

/// Parses `n m` followed by `m` pairs of 1-based vertex numbers.
pub fn parse_relations(raw: &str) -> Result<RelationsInput> {
    let mut tokens = raw.split_whitespace();

    let people = next_number(&mut tokens, "number of people")?;
    let count = next_number(&mut tokens, "number of relations")?;

    // The declared count is untrusted; never reserve more pairs than the input holds.
    let available = tokens.clone().count() / 2;
    let mut relations = Vec::with_capacity(count.min(available));
    for i in 0..count {
        let x = next_number(&mut tokens, &format!("source of relation {}", i + 1))?;
        let y = next_number(&mut tokens, &format!("target of relation {}", i + 1))?;
        relations.push((to_index(x, people, i)?, to_index(y, people, i)?));
    }

    if let Some(extra) = tokens.next() {
        return Err(anyhow!(
            "trailing input after {count} relations: {extra:?}"
        ));
    }

    Ok(RelationsInput { people, relations })
}

pub async fn read_relations_file(path: &str) -> Result<RelationsInput> {
    let raw = fs::read_to_string(path).await?;
    parse_relations(&raw)
}

pub async fn read_relations_stdin() -> Result<RelationsInput> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("reading relations from stdin")?;
    parse_relations(&raw)
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    let tok = tokens
        .next()
        .ok_or_else(|| anyhow!("unexpected end of input while reading {what}"))?;
    tok.parse::<usize>()
        .with_context(|| format!("invalid {what}: {tok:?}"))
}

fn to_index(person: usize, people: usize, relation: usize) -> Result<usize> {
    if person == 0 || person > people {
        return Err(anyhow!(
            "relation {} names person {person}, expected 1..={people}",
            relation + 1
        ));
    }
    Ok(person - 1)
}
