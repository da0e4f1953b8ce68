//! Function symbol table.
//!
//! Holds `(address, name)` pairs sorted by address. [`SymbolTable::find`]
//! returns the function containing an address: the symbol with the greatest
//! address not above it.

/// A function symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Start address.
    pub addr: u64,
    /// Symbol name.
    pub name: String,
}

/// Address-sorted function symbols.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Builds a table, sorting `symbols` by address.
    pub fn new(mut symbols: Vec<Symbol>) -> Self {
        symbols.sort_by_key(|s| s.addr);
        Self { symbols }
    }

    /// Number of symbols.
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table holds no symbols.
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Finds the symbol with the greatest address `<= addr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv64im_core::sim::symbols::{Symbol, SymbolTable};
    ///
    /// let table = SymbolTable::new(vec![
    ///     Symbol { addr: 0x8000_0100, name: "main".into() },
    ///     Symbol { addr: 0x8000_0000, name: "_start".into() },
    /// ]);
    /// assert_eq!(table.find(0x8000_0104).map(|s| s.name.as_str()), Some("main"));
    /// assert_eq!(table.find(0x8000_00fc).map(|s| s.name.as_str()), Some("_start"));
    /// assert!(table.find(0x7fff_fffc).is_none());
    /// ```
    pub fn find(&self, addr: u64) -> Option<&Symbol> {
        let idx = self.symbols.partition_point(|s| s.addr <= addr);
        idx.checked_sub(1).and_then(|i| self.symbols.get(i))
    }

    /// Name of the function containing `addr`, or `"???"`.
    pub fn name_of(&self, addr: u64) -> &str {
        self.find(addr).map_or("???", |s| s.name.as_str())
    }
}
