use walletgrid_core::{update, DirectoryConfig, Environment, ExplorerState, Msg};

#[test]
fn update_is_noop() {
    let state = ExplorerState::new(
        DirectoryConfig::default(),
        Environment::default(),
        None,
        Vec::new(),
    );
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
