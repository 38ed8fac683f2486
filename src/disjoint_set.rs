use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
// Elements are interned into dense indices; parent/rank work on the indices.
#[derive(Debug, Clone)]
pub struct DisjointSet<T: Eq + Hash + Clone> {
	elements: Vec<T>,
	index: HashMap<T, usize>,
	parent: Vec<usize>,
	rank: Vec<usize>,
	sets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisjointSetError {
	#[error("element {0} is not part of the disjoint-set universe")]
	UnknownElement(String),
}

impl<T: Eq + Hash + Clone + std::fmt::Debug> DisjointSet<T> {
	/// Every element starts out as its own singleton class. Duplicates are registered once.
	pub fn new<I: IntoIterator<Item = T>>(elements: I) -> DisjointSet<T> {
		let mut ds = DisjointSet {
			elements: Vec::new(),
			index: HashMap::new(),
			parent: Vec::new(),
			rank: Vec::new(),
			sets: 0,
		};
		for x in elements {
			if ds.index.contains_key(&x) {
				continue;
			}
			let i = ds.elements.len();
			ds.index.insert(x.clone(), i);
			ds.elements.push(x);
			ds.parent.push(i);
			ds.rank.push(0);
			ds.sets += 1;
		}
		ds
	}

	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Number of disjoint classes currently in the partition.
	pub fn set_count(&self) -> usize {
		self.sets
	}

	pub fn contains(&self, x: &T) -> bool {
		self.index.contains_key(x)
	}

	/// Representative of the class holding `x`.
	pub fn find(&mut self, x: &T) -> Result<T, DisjointSetError> {
		let i = self.index_of(x)?;
		let root = self.find_idx(i);
		Ok(self.elements[root].clone())
	}

	/// Merges the classes of `x` and `y`. Returns false when they were already one class.
	pub fn union(&mut self, x: &T, y: &T) -> Result<bool, DisjointSetError> {
		let x_idx = self.index_of(x)?;
		let y_idx = self.index_of(y)?;
		Ok(self.unite(x_idx, y_idx))
	}

	pub fn same_set(&mut self, x: &T, y: &T) -> Result<bool, DisjointSetError> {
		let x_idx = self.index_of(x)?;
		let y_idx = self.index_of(y)?;
		Ok(self.find_idx(x_idx) == self.find_idx(y_idx))
	}

	fn index_of(&self, x: &T) -> Result<usize, DisjointSetError> {
		self.index
			.get(x)
			.copied()
			.ok_or_else(|| DisjointSetError::UnknownElement(format!("{:?}", x)))
	}

	fn find_idx(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find_idx(parent);
		}
		self.parent[x]
	}

	fn unite(&mut self, x: usize, y: usize) -> bool {
		let x_root = self.find_idx(x);
		let y_root = self.find_idx(y);
		if x_root == y_root {
			return false;
		}
		if self.rank[x_root] < self.rank[y_root] {
			self.parent[x_root] = y_root;
		} else if self.rank[x_root] > self.rank[y_root] {
			self.parent[y_root] = x_root;
		} else {
			self.parent[y_root] = x_root;
			self.rank[x_root] += 1;
		}
		self.sets -= 1;
		true
	}
}

impl<T: Eq + Hash + Clone + std::fmt::Debug> FromIterator<T> for DisjointSet<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		DisjointSet::new(iter)
	}
}
