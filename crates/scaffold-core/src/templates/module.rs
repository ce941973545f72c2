//! Catalog of files generated by `generate` for a named module
//!
//! Unlike the project catalog, target paths here are themselves templated:
//! both `relative_path` and `body` carry `{{module_snake}}` /
//! `{{module_pascal}}` markers and go through the same rendering pass.

use super::FileTemplate;

/// Files generated per module, in write order.
pub const MODULE_CATALOG: &[FileTemplate] = &[
    FileTemplate {
        relative_path: "models/{{module_snake}}.go",
        body: MODEL_GO,
    },
    FileTemplate {
        relative_path: "services/{{module_snake}}_service.go",
        body: SERVICE_GO,
    },
    FileTemplate {
        relative_path: "controllers/{{module_snake}}_controller.go",
        body: CONTROLLER_GO,
    },
    FileTemplate {
        relative_path: "routes/{{module_snake}}_routes.go",
        body: ROUTES_GO,
    },
];

const MODEL_GO: &str = r#"package models

// {{module_pascal}} is a {{module_snake}} document.
type {{module_pascal}} struct {
	BaseModel `bson:",inline"`

	// Add your fields here
	Name string `bson:"name" json:"name"`
}

// GetBaseModel implements HasBaseModel.
func (m *{{module_pascal}}) GetBaseModel() *BaseModel {
	return &m.BaseModel
}

// SetBaseModel implements HasBaseModel.
func (m *{{module_pascal}}) SetBaseModel(base BaseModel) {
	m.BaseModel = base
}
"#;

const SERVICE_GO: &str = r#"package services

import (
	"go.mongodb.org/mongo-driver/mongo"
)

// {{module_pascal}}Service handles {{module_snake}} persistence.
type {{module_pascal}}Service struct {
	BaseService
}

// New{{module_pascal}}Service builds the service on the shared database handle.
func New{{module_pascal}}Service(db *mongo.Database) *{{module_pascal}}Service {
	return &{{module_pascal}}Service{
		BaseService: NewBaseService(db, "{{module_snake}}"),
	}
}
"#;

const CONTROLLER_GO: &str = r#"package controllers

import (
	"net/http"

	"github.com/gin-gonic/gin"
	"go.mongodb.org/mongo-driver/bson"

	"{{module_path}}/models"
	"{{module_path}}/services"
	"{{module_path}}/utils"
)

// {{module_pascal}}Controller exposes CRUD handlers for {{module_snake}}.
type {{module_pascal}}Controller struct {
	service *services.{{module_pascal}}Service
}

// New{{module_pascal}}Controller wires the controller to its service.
func New{{module_pascal}}Controller(service *services.{{module_pascal}}Service) *{{module_pascal}}Controller {
	return &{{module_pascal}}Controller{service: service}
}

// GetAll handles GET /{{module_snake}}
func (ctrl *{{module_pascal}}Controller) GetAll(c *gin.Context) {
	page, limit := utils.GetPaginationParams(c)

	results, total, err := ctrl.service.FindAll(page, limit, nil, nil)
	if err != nil {
		utils.ErrorResponse(c, http.StatusInternalServerError, err.Error(), nil)
		return
	}

	utils.PaginationResponse(c, "{{module_pascal}} list", results, total, page, limit)
}

// GetByID handles GET /{{module_snake}}/:id
func (ctrl *{{module_pascal}}Controller) GetByID(c *gin.Context) {
	result, err := ctrl.service.FindByID(c.Param("id"))
	if err != nil {
		utils.ErrorResponse(c, http.StatusNotFound, "{{module_pascal}} not found", nil)
		return
	}

	utils.SuccessResponse(c, "{{module_pascal}} found", result)
}

// Create handles POST /{{module_snake}}
func (ctrl *{{module_pascal}}Controller) Create(c *gin.Context) {
	var input models.{{module_pascal}}
	if err := c.ShouldBindJSON(&input); err != nil {
		utils.ErrorResponse(c, http.StatusBadRequest, err.Error(), nil)
		return
	}

	id, err := ctrl.service.CreateWithAudit(&input)
	if err != nil {
		utils.ErrorResponse(c, http.StatusInternalServerError, err.Error(), nil)
		return
	}

	utils.SuccessResponse(c, "{{module_pascal}} created", gin.H{"id": id})
}

// Update handles PUT /{{module_snake}}/:id
func (ctrl *{{module_pascal}}Controller) Update(c *gin.Context) {
	var input bson.M
	if err := c.ShouldBindJSON(&input); err != nil {
		utils.ErrorResponse(c, http.StatusBadRequest, err.Error(), nil)
		return
	}

	if err := ctrl.service.Update(c.Param("id"), input); err != nil {
		utils.ErrorResponse(c, http.StatusInternalServerError, err.Error(), nil)
		return
	}

	utils.SuccessResponse(c, "{{module_pascal}} updated", nil)
}

// Delete handles DELETE /{{module_snake}}/:id
func (ctrl *{{module_pascal}}Controller) Delete(c *gin.Context) {
	if err := ctrl.service.Delete(c.Param("id")); err != nil {
		utils.ErrorResponse(c, http.StatusInternalServerError, err.Error(), nil)
		return
	}

	utils.SuccessResponse(c, "{{module_pascal}} deleted", nil)
}
"#;

const ROUTES_GO: &str = r#"package routes

import (
	"github.com/gin-gonic/gin"

	"{{module_path}}/config"
	"{{module_path}}/controllers"
	"{{module_path}}/services"
)

// Register{{module_pascal}}Routes wires the {{module_snake}} CRUD endpoints.
func Register{{module_pascal}}Routes(api *gin.RouterGroup, cfg *config.Config) {
	service := services.New{{module_pascal}}Service(cfg.Database)
	ctrl := controllers.New{{module_pascal}}Controller(service)

	group := api.Group("/{{module_snake}}")
	group.GET("", ctrl.GetAll)
	group.GET("/:id", ctrl.GetByID)
	group.POST("", ctrl.Create)
	group.PUT("/:id", ctrl.Update)
	group.DELETE("/:id", ctrl.Delete)
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_paths_are_templated() {
        for t in MODULE_CATALOG {
            assert!(
                t.relative_path.contains("{{module_snake}}"),
                "{} should carry the module name",
                t.relative_path
            );
        }
    }

    #[test]
    fn test_module_files_land_in_existing_directories() {
        // generate never creates directories; every target must sit in a
        // directory init already made
        for t in MODULE_CATALOG {
            let dir = t.relative_path.split('/').next().unwrap();
            assert!(
                crate::plan::PROJECT_DIRS.contains(&dir),
                "{} is outside the project layout",
                t.relative_path
            );
        }
    }
}
