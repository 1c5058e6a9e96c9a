use bevy::prelude::*;

#[derive(Component)]
pub struct Globe;

#[derive(Component)]
pub struct Sun;
