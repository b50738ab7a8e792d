use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainStats {
    pub people: usize,
    pub relations: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub condensed_relations: usize,
    pub longest_chain: usize,
}
