//! Lookup table from resolver kind to the installed resolver.

use std::fmt;
use std::sync::Arc;

use sharereview_core::traits::NameResolver;
use sharereview_core::types::ResolverKind;

/// The set of name resolvers available to the cache.
///
/// A kind left empty (e.g. no circles app installed) resolves to the raw
/// identifier.
#[derive(Clone, Default)]
pub struct NameResolvers {
    user: Option<Arc<dyn NameResolver>>,
    group: Option<Arc<dyn NameResolver>>,
    room: Option<Arc<dyn NameResolver>>,
    board: Option<Arc<dyn NameResolver>>,
    circle: Option<Arc<dyn NameResolver>>,
}

impl NameResolvers {
    /// Creates an empty resolver table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the resolver for `kind`, replacing any previous one.
    pub fn with(mut self, kind: ResolverKind, resolver: Arc<dyn NameResolver>) -> Self {
        *self.slot_mut(kind) = Some(resolver);
        self
    }

    /// Returns the resolver installed for `kind`.
    pub fn get(&self, kind: ResolverKind) -> Option<&Arc<dyn NameResolver>> {
        match kind {
            ResolverKind::User => self.user.as_ref(),
            ResolverKind::Group => self.group.as_ref(),
            ResolverKind::Room => self.room.as_ref(),
            ResolverKind::Board => self.board.as_ref(),
            ResolverKind::Circle => self.circle.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: ResolverKind) -> &mut Option<Arc<dyn NameResolver>> {
        match kind {
            ResolverKind::User => &mut self.user,
            ResolverKind::Group => &mut self.group,
            ResolverKind::Room => &mut self.room,
            ResolverKind::Board => &mut self.board,
            ResolverKind::Circle => &mut self.circle,
        }
    }
}

impl fmt::Debug for NameResolvers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolvers")
            .field("user", &self.user.is_some())
            .field("group", &self.group.is_some())
            .field("room", &self.room.is_some())
            .field("board", &self.board.is_some())
            .field("circle", &self.circle.is_some())
            .finish()
    }
}
