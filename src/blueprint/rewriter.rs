//! The recursive blueprint rewriter

use indexmap::IndexMap;

use super::allocator::BlockIdAllocator;
use super::types::{BlueprintFile, Construct};
use crate::database::{BlockDatabase, MaterialResolver, UNKNOWN_BLOCK};
use crate::ops::RemapDirective;

/// Applies remap directives to a blueprint's construct tree.
///
/// Owns the GUID <-> block ID table and the resolver's diagnostics for the
/// duration of one run, so every directive applied through one rewriter
/// shares the same ID allocations and warn-once bookkeeping.
pub struct Rewriter<'a> {
    db: &'a BlockDatabase,
    resolver: MaterialResolver<'a>,
    allocator: BlockIdAllocator,
}

impl<'a> Rewriter<'a> {
    /// Create a rewriter seeded from the blueprint's `ItemDictionary`.
    #[must_use]
    pub fn new(db: &'a BlockDatabase, dictionary: &IndexMap<String, String>) -> Self {
        Self {
            db,
            resolver: MaterialResolver::new(db),
            allocator: BlockIdAllocator::new(dictionary),
        }
    }

    /// Apply one directive to a construct tree.
    ///
    /// A directive with either material side unset is a warned no-op.
    /// Sub-constructs are rewritten before the construct's own slots;
    /// constructs are disjoint, so the order has no observable effect.
    pub fn apply(&mut self, directive: &RemapDirective, construct: &mut Construct) {
        let (Some(from_base), Some(to_base)) = (
            directive.from_base_block.as_deref(),
            directive.to_base_block.as_deref(),
        ) else {
            tracing::warn!("one of the base block guids is unspecified, nothing to do");
            return;
        };
        self.apply_at_depth(directive, from_base, to_base, construct, 0);
    }

    fn apply_at_depth(
        &mut self,
        directive: &RemapDirective,
        from_base: &str,
        to_base: &str,
        construct: &mut Construct,
        depth: usize,
    ) {
        for sub in &mut construct.sub_constructs {
            self.apply_at_depth(directive, from_base, to_base, sub, depth + 1);
        }

        let mut updated = 0usize;
        let colors = &mut construct.block_color_indices;
        for (idx, slot) in construct.block_ids.iter_mut().enumerate() {
            if let Some(from_color) = directive.from_color {
                if colors.get(idx).copied() != Some(from_color) {
                    continue;
                }
            }

            let Some(current_guid) = self.allocator.guid_for_id(*slot).map(str::to_string)
            else {
                continue;
            };
            if self.db.base_block_guid_of(&current_guid) != Some(from_base) {
                continue;
            }
            let Some(new_guid) = self.resolver.resolve(&current_guid, to_base) else {
                continue;
            };

            *slot = self.allocator.get_or_allocate(&new_guid);
            if let Some(to_color) = directive.to_color {
                if let Some(color) = colors.get_mut(idx) {
                    *color = to_color;
                }
            }
            updated += 1;
        }

        tracing::info!("{:indent$}remapped {updated} blocks", "", indent = depth);
    }

    /// Tear down the rewriter, yielding the regenerated `ItemDictionary`.
    #[must_use]
    pub fn into_dictionary(self) -> IndexMap<String, String> {
        self.allocator.into_dictionary()
    }
}

/// Apply remap directives to a whole blueprint file, in order.
///
/// Clears the cached material-cost fields (stale after any remap), applies
/// each directive over the full construct tree, then regenerates the
/// `ItemDictionary` so every referenced GUID - original or newly
/// introduced - has an entry.
pub fn refit_blueprint(
    db: &BlockDatabase,
    blueprint: &mut BlueprintFile,
    directives: &[RemapDirective],
) {
    blueprint.saved_material_cost = None;
    blueprint.blueprint.contained_material_cost = 0.0;

    let mut rewriter = Rewriter::new(db, &blueprint.item_dictionary);
    for directive in directives {
        tracing::info!(
            "mapping {} to {}...",
            directive
                .from_base_block
                .as_deref()
                .map_or(UNKNOWN_BLOCK, |guid| db.name_of(guid)),
            directive
                .to_base_block
                .as_deref()
                .map_or(UNKNOWN_BLOCK, |guid| db.name_of(guid)),
        );
        rewriter.apply(directive, &mut blueprint.blueprint);
    }

    tracing::info!("updating item dictionary...");
    blueprint.item_dictionary = rewriter.into_dictionary();
}
