//! Tensor interchange with the external model via `.npy` files.

use anyhow::{Context, Result};
use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use std::fs::{self, File};
use std::path::Path;

/// Write a tensor to a `.npy` file, creating parent directories as needed.
pub fn save_tensor(path: &Path, tensor: &Array2<f32>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create tensor file {:?}", path))?;
    tensor
        .write_npy(file)
        .with_context(|| format!("Failed to write tensor to {:?}", path))?;
    Ok(())
}

/// Read a 2D `f32` tensor from a `.npy` file.
pub fn load_tensor(path: &Path) -> Result<Array2<f32>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open tensor file {:?}", path))?;
    let tensor = Array2::<f32>::read_npy(file)
        .with_context(|| format!("Failed to read tensor from {:?}", path))?;
    Ok(tensor)
}
